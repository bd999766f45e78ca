//! Error types for blobseg-region

use thiserror::Error;

/// Errors that can occur during segmentation operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobseg_core::Error),

    /// Threshold is NaN or infinite
    #[error("non-finite threshold: {0}")]
    NonFiniteThreshold(f32),

    /// Label space exhausted
    #[error("label space exhausted after {max} components")]
    LabelOverflow { max: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Operation requires a single-channel image
    #[error("expected a single-channel image, got {0} channels")]
    UnsupportedChannels(u32),
}

/// Result type for segmentation operations
pub type RegionResult<T> = Result<T, RegionError>;
