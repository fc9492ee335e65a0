//! Error types for algoviz-steps.

use thiserror::Error;

/// Result type for algoviz-steps operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving a run request.
///
/// The generators themselves are total; these only come from parsing
/// identifiers supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The algorithm identifier is not one of the supported eight.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The sort order is neither "asc" nor "desc".
    #[error("invalid sort order: {0}")]
    InvalidOrder(String),
}
