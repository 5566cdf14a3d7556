use crate::checksum::ChecksumError;
use crate::range_table::RangeError;
use thiserror::Error;

/// Why a number was rejected by a `validate` function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The number has an invalid format")]
    InvalidFormat,

    #[error("The number has an invalid length")]
    InvalidLength,

    #[error("The number's checksum or check digit is invalid")]
    InvalidChecksum,

    /// A part of the number (a date, a region, a registration group...) is not valid.
    #[error("One of the parts of the number is invalid or unknown")]
    InvalidComponent,
}

impl From<ChecksumError> for ValidationError {
    fn from(_err: ChecksumError) -> Self {
        // callers pass fixed weights and moduli, only the input can be at fault
        ValidationError::InvalidFormat
    }
}

impl From<RangeError> for ValidationError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::InvalidInput => ValidationError::InvalidFormat,
            RangeError::NoMatchingRange { .. } | RangeError::UnknownTable(_) => {
                ValidationError::InvalidComponent
            }
        }
    }
}
