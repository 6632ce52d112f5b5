use thiserror::Error;

/// Shape disagreement between inputs that must agree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{what} mismatch: expected {expected}, found {found}")]
    Mismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl DimensionError {
    /// Returns `Ok(())` when `found == expected`, otherwise a `Mismatch`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] naming `what` when the sizes differ.
    pub fn check(what: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::Mismatch {
                what,
                expected,
                found,
            })
        }
    }
}
