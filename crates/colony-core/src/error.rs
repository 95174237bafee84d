//! Error types for Colony Core

use thiserror::Error;

use crate::allocation::{AllocationError, SwapError};
use crate::manual::ManualError;
use crate::parser::{LoadError, ParseError};

/// Main error type for colony operations
#[derive(Debug, Error)]
pub enum ColonyError {
    /// The configuration source could not be read
    #[error("Read failure: {0}")]
    Read(#[source] std::io::Error),

    /// The configuration text is malformed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Manual data entry was rejected
    #[error("Manual entry error: {0}")]
    Manual(#[from] ManualError),

    /// The document cannot seed an allocation
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// A swap request was rejected
    #[error("Swap error: {0}")]
    Swap(#[from] SwapError),
}

impl From<LoadError> for ColonyError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::ReadFailure(io) => ColonyError::Read(io),
            LoadError::Parse(parse) => ColonyError::Parse(parse),
        }
    }
}

/// Result type alias for colony operations
pub type Result<T> = std::result::Result<T, ColonyError>;
