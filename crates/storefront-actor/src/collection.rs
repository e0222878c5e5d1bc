//! # Collection Trait
//!
//! The `Collection` trait describes one append-only, ordered collection managed by a
//! [`CollectionActor`](crate::CollectionActor). A collection is a marker type: it never
//! holds data itself, it only names the item type stored by the actor, the key that
//! items are looked up by, the payload an append carries, and the context injected at
//! run time.
//!
//! # Architecture Note
//! Writing the actor loop against this trait means the catalog and the cart share one
//! implementation of ordering, lookup and sequential processing. Both can even store
//! the same item type (`Arc<Product>`), which is why the trait is implemented on a
//! marker rather than on the item.
//!
//! # Admission
//! [`Collection::admit`] turns an append payload into the item that gets stored. It may
//! decline (`Ok(None)`), in which case the collection is left untouched and the caller
//! is told nothing was appended. It may also fail, which the actor reports as
//! [`FrameworkError::Rejected`](crate::FrameworkError::Rejected).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Contract for an append-only ordered collection served by a `CollectionActor`.
///
/// # Async & Context
/// `admit` is async so it can call other actors through the injected `Context`
/// (the cart resolves product ids against the catalog this way). The context is passed
/// to `run()`, not `new()`, so actors can be created before their dependencies are.
#[async_trait]
pub trait Collection: Send + Sync + 'static {
    /// The value stored in the collection and handed back by reads.
    /// Reads return clones, so this is usually an `Arc`.
    type Item: Clone + Send + Sync + Debug + 'static;

    /// The lookup key. Not required to be unique; lookups return the first match.
    type Key: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The payload carried by an append request.
    type Append: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type returned when admission fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the lookup key of a stored item.
    fn key_of(item: &Self::Item) -> &Self::Key;

    /// Converts an append payload into the item to store.
    ///
    /// Return `Ok(None)` to decline the append without an error.
    async fn admit(
        params: Self::Append,
        ctx: &Self::Context,
    ) -> Result<Option<Self::Item>, Self::Error>;
}
