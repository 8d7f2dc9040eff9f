//! Unified error types for the user directory
//!
//! Creation is the only operation that can fail. Absence of a record on
//! lookup and refused deactivation are ordinary return values, never
//! errors, so callers check results instead of catching.

use thiserror::Error;

/// All directory errors.
///
/// This is the canonical error type for all directory operations. The only
/// raising path today is age validation at creation time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Creation rejected: the supplied age is below the legal minimum.
    ///
    /// The message is a frozen consumer-facing literal.
    #[error("O usuário deve ser maior de idade.")]
    UnderLegalAge {
        /// The age that was rejected
        age: u32,
    },
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a validation error raised at creation time.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::UnderLegalAge { .. })
    }
}
