//! Error types for enumeration primitives.
//!
//! Running out of input is never an error here: lookups that can fall off
//! the end of a sequence return `Option`. Errors are reserved for arguments
//! that no bijection or digit conversion can accept.

use num_bigint::BigUint;

/// Type alias for enumeration results
pub type EnumerationResult<T> = Result<T, EnumerationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerationError {
    #[error("cannot demux nonzero code {code} into zero values")]
    NonZeroEmptyDemux { code: BigUint },

    #[error("base must be at least 2, got {base}")]
    InvalidBase { base: BigUint },

    #[error("digit {digit} is out of range for base {base}")]
    InvalidDigit { digit: BigUint, base: BigUint },

    #[error("exponent {exponent} is too large to materialize")]
    ExponentTooLarge { exponent: BigUint },

    #[error("invalid range: {0}")]
    InvalidRange(String),
}
