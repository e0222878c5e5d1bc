//! # Collection Messages
//!
//! This module defines the request type exchanged between a `CollectionClient` and
//! its `CollectionActor`.

use crate::collection::Collection;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Append-only
/// A collection only ever grows, so there is no update or delete. The variants are:
///
/// - **Append**: Admits the payload through [`Collection::admit`] and pushes the result
///   to the end. Replies with the stored item, or `None` when admission declined.
/// - **AppendAndList**: Same as `Append`, but replies with the full contents as they
///   stand after the append, taken in the same turn.
/// - **List**: Replies with every item in insertion order.
/// - **Find**: Replies with the first item, in insertion order, whose key matches.
///
/// Every request is handled to completion before the next one is received, so a
/// reply always reflects a state no other request was halfway through changing.
#[derive(Debug)]
pub enum CollectionRequest<C: Collection> {
    Append {
        params: C::Append,
        respond_to: Response<Option<C::Item>>,
    },
    AppendAndList {
        params: C::Append,
        respond_to: Response<Vec<C::Item>>,
    },
    List {
        respond_to: Response<Vec<C::Item>>,
    },
    Find {
        key: C::Key,
        respond_to: Response<Option<C::Item>>,
    },
}
