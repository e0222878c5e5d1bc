//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// A lookup miss is not an error; `find_by_id` returns `None` for it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
