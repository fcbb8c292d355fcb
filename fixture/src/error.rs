//! Error types for fixture generation and validation.

use std::fmt;

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Errors that can occur while generating or validating a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FixtureError {
    /// Record count is negative.
    InvalidArgument { count: i64 },

    /// Record count exceeds the configured limit.
    LimitsExceeded { limit: usize, actual: usize },

    /// Bundle name does not match the fixture name.
    UnexpectedName { found: String },

    /// Bundle version does not match the fixture version.
    UnexpectedVersion { found: String },

    /// Record id does not match its position.
    IdMismatch { index: usize, found: u32 },

    /// Record name is not derived from its id.
    NameMismatch { index: usize, found: String },

    /// Record description differs from the fixture description.
    DescriptionMismatch { index: usize },

    /// Record timestamp is not valid RFC 3339.
    InvalidTimestamp { index: usize, value: String },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { count } => {
                write!(f, "invalid argument: record count {count} is negative")
            }
            Self::LimitsExceeded { limit, actual } => {
                write!(f, "record limit exceeded: {actual} > {limit}")
            }
            Self::UnexpectedName { found } => {
                write!(f, "unexpected bundle name: {found:?}")
            }
            Self::UnexpectedVersion { found } => {
                write!(f, "unexpected bundle version: {found:?}")
            }
            Self::IdMismatch { index, found } => {
                write!(f, "record {index} has id {found}")
            }
            Self::NameMismatch { index, found } => {
                write!(f, "record {index} has name {found:?}")
            }
            Self::DescriptionMismatch { index } => {
                write!(f, "record {index} has a different description")
            }
            Self::InvalidTimestamp { index, value } => {
                write!(f, "record {index} has invalid timestamp {value:?}")
            }
        }
    }
}

impl std::error::Error for FixtureError {}
