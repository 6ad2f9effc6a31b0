/// Algorithm used to compute a determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantMethod {
    /// Recursive expansion along the first row. O(n!), exact.
    CofactorExpansion,
    /// Fraction-free Gaussian elimination. O(n³), exact for integers and fractions.
    Bareiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Square matrices of at least this size use elimination instead of cofactor expansion.
    pub elimination_threshold: Option<usize>,
    /// Seed for `Matrix::random`, thread RNG when `None`.
    pub random_seed: Option<u64>,
    /// Cofactor expansion at or above this size logs a warning.
    pub cofactor_warn_size: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            elimination_threshold: None,
            random_seed: None,
            cofactor_warn_size: 10,
        }
    }
}

impl MatrixConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elimination_threshold(mut self, threshold: usize) -> Self {
        self.elimination_threshold = Some(threshold);
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_cofactor_warn_size(mut self, size: usize) -> Self {
        self.cofactor_warn_size = size;
        self
    }

    pub fn determinant_method(&self, size: usize) -> DeterminantMethod {
        match self.elimination_threshold {
            Some(threshold) if size >= threshold => DeterminantMethod::Bareiss,
            _ => DeterminantMethod::CofactorExpansion,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
