//! Error types for blobseg-test

use thiserror::Error;

/// Errors raised while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobseg_core::Error),

    /// A fixture description was inconsistent
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

/// Result type for test support operations
pub type TestResult<T> = Result<T, TestError>;
