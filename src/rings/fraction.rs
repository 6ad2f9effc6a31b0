//! Exact rational numbers, used as a matrix element type when inverses and determinants
//! must not lose precision.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Denominator cannot be zero")]
    ZeroDenominator,
}

/// Rational number kept in lowest terms with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    /// # Panics
    ///
    /// Panics if `den` is zero, see [`Fraction::try_new`].
    pub fn new(num: BigInt, den: BigInt) -> Self {
        match Self::try_new(num, den) {
            Ok(fraction) => fraction,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_new(num: BigInt, den: BigInt) -> Result<Self, FractionError> {
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Ok(Self {
                num: -num,
                den: -den,
            });
        }
        Ok(Self { num, den })
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses "a" or "a/b".
    fn from_str(s: &str) -> Result<Self, FractionError> {
        let parse = |part: &str| {
            let part = part.trim();
            BigInt::parse_bytes(part.as_bytes(), 10)
                .ok_or_else(|| FractionError::InvalidNumber(part.to_string()))
        };

        let mut parts = s.split('/');
        let num = parse(parts.next().unwrap_or(""))?;
        let den = match parts.next() {
            Some(den) => parse(den)?,
            None => BigInt::one(),
        };
        if let Some(extra) = parts.next() {
            return Err(FractionError::InvalidNumber(extra.to_string()));
        }

        Fraction::try_new(num, den)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Fraction> {
        Some(Fraction::from(n))
    }

    fn from_u64(n: u64) -> Option<Fraction> {
        Some(Fraction {
            num: BigInt::from(n),
            den: BigInt::one(),
        })
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl Eq for Fraction {}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
