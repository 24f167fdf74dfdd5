use std::num::ParseIntError;

/// Failure to read a [`BigUint`](crate::BigUint) from decimal text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigUintError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
    #[error("invalid digit group: {0}")]
    Group(#[from] ParseIntError),
}

/// A signed native integer was negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert negative value {0} to an unsigned big integer")]
pub struct NegativeValueError(pub i128);

/// The value does not fit the requested native integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("big integer does not fit in {0}")]
pub struct TryFromBigUintError(pub &'static str);
