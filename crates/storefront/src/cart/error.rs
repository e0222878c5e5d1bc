//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Adding an id the catalog does not contain is not one of them: the cart is simply
/// left unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The catalog could not be reached while resolving a product id.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The sum of the cart's prices does not fit in a `Decimal`.
    #[error("Cart total overflowed over {0} entries")]
    TotalOverflow(usize),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
