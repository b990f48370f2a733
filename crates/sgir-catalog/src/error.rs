//! Catalog error types.

use thiserror::Error;

/// Failure to parse catalog seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed JSON did not match the expected shape.
    #[error("malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),
}
