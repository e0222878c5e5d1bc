//! Type-safe wrappers around [`CollectionClient`](storefront_actor::CollectionClient).
//!
//! # Pattern
//! Each wrapper holds a generic `CollectionClient<C>` and implements
//! [`ActorClient`](storefront_actor::ActorClient) for the shared reads, then adds the
//! domain operations on top. Framework errors are mapped to the collection's own error
//! type, so callers never see the message-passing layer.

pub mod cart_client;
pub mod catalog_client;

pub use cart_client::*;
pub use catalog_client::*;
