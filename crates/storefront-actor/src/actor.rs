//! # Collection Actor
//!
//! This module defines the `CollectionActor`, the component that owns one ordered
//! collection. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the items.

use crate::client::CollectionClient;
use crate::collection::Collection;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an append-only, ordered collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the items and the receiver
/// end of the channel.
///
/// **Concurrency Model**:
/// Any number of clients may send requests at once, but the actor handles them one at a
/// time in a loop. An append and a read can never interleave, and no `Mutex` guards the
/// items: the task that owns them is the only code that touches them.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `CollectionActor::new()` to get the `actor` and its `client`.
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use std::sync::Arc;
/// use storefront_actor::{Collection, CollectionActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct Names;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// #[async_trait]
/// impl Collection for Names {
///     type Item = Arc<String>;
///     type Key = String;
///     type Append = String;
///     type Context = ();
///     type Error = Never;
///
///     fn key_of(item: &Arc<String>) -> &String { item }
///     async fn admit(name: String, _: &()) -> Result<Option<Arc<String>>, Never> {
///         Ok(Some(Arc::new(name)))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CollectionActor::<Names>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.append("alice".to_string()).await.unwrap();
///     client.append("bob".to_string()).await.unwrap();
///
///     let names = client.list().await.unwrap();
///     assert_eq!(names.len(), 2);
///     assert_eq!(names[0].as_str(), "alice");
/// }
/// ```
///
/// # Operations
///
/// * **Append**: calls [`Collection::admit`]; if it yields an item, pushes it to the end
///   and replies with it. A declined admission replies `None` and changes nothing.
/// * **AppendAndList**: as Append, then replies with a snapshot of all items.
/// * **List**: replies with a snapshot of all items in insertion order.
/// * **Find**: scans from the front and replies with the first item whose key matches.
pub struct CollectionActor<C: Collection> {
    receiver: mpsc::Receiver<CollectionRequest<C>>,
    items: Vec<C::Item>,
}

impl<C: Collection> CollectionActor<C> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space. Must be non-zero.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
        };
        (actor, CollectionClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed to [`Collection::admit`] on every append.
    pub async fn run(mut self, context: C::Context) {
        // "Catalog" instead of "storefront::catalog::Catalog"
        let collection = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(collection, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Append { params, respond_to } => {
                    let result = self.append(collection, params, &context).await;
                    let _ = respond_to.send(result);
                }
                CollectionRequest::AppendAndList { params, respond_to } => {
                    let result = self
                        .append(collection, params, &context)
                        .await
                        .map(|_| self.items.clone());
                    let _ = respond_to.send(result);
                }
                CollectionRequest::List { respond_to } => {
                    debug!(collection, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CollectionRequest::Find { key, respond_to } => {
                    let item = self
                        .items
                        .iter()
                        .find(|item| C::key_of(item) == &key)
                        .cloned();
                    debug!(collection, %key, found = item.is_some(), "Find");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(collection, size = self.items.len(), "Shutdown");
    }

    async fn append(
        &mut self,
        collection: &str,
        params: C::Append,
        context: &C::Context,
    ) -> Result<Option<C::Item>, FrameworkError> {
        debug!(collection, ?params, "Append");
        match C::admit(params, context).await {
            Ok(Some(item)) => {
                self.items.push(item.clone());
                info!(collection, key = %C::key_of(&item), size = self.items.len(), "Appended");
                Ok(Some(item))
            }
            Ok(None) => {
                debug!(collection, size = self.items.len(), "Append declined");
                Ok(None)
            }
            Err(e) => {
                warn!(collection, error = %e, "Append rejected");
                Err(FrameworkError::Rejected(Box::new(e)))
            }
        }
    }
}
