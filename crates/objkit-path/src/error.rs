//! Error types for the path crate.

use thiserror::Error;

/// Errors that can occur while rewriting values through a path.
#[derive(Debug, Error)]
pub enum PathError {
    /// The parent path did not reach a property bag.
    #[error("path {path:?} does not reach an object")]
    Unreachable { path: Vec<String> },
}
