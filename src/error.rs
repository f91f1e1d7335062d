//! Error type shared by every primitive.
//!
//! Only argument validation fails. Numeric degeneracies (zero variance,
//! NaN input) are not errors: they propagate as NaN the way MATLAB does.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Out-of-range quantile level, bad axis, shape mismatch or an
    /// oversized subset request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::InvalidArgument(format!(..)))`.
macro_rules! invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::InvalidArgument(format!($($arg)*)))
    };
}
pub(crate) use invalid;
