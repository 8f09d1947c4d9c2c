//! Error types for DIMENSA

use thiserror::Error;

use crate::Dimension;

/// Core DIMENSA errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensaError {
    /// The only recoverable failure: the two units measure different kinds
    /// of quantity
    #[error("Incompatible dimensions: cannot convert [{from}] to [{to}]")]
    IncompatibleDimensions { from: Dimension, to: Dimension },
}

/// Result type for DIMENSA operations
pub type DimensaResult<T> = Result<T, DimensaError>;
