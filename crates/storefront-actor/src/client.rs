//! # Collection Client
//!
//! This module defines the generic client for communicating with collection actors.

use crate::collection::Collection;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// The `CollectionClient<C>` provides a type-safe, async API for a `CollectionActor<C>`.
/// It forwards requests over a Tokio mpsc channel and awaits replies on oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every method resolves to `Result<…, FrameworkError>`.
/// * **Shutdown** – the actor stops once every clone has been dropped.
pub struct CollectionClient<C: Collection> {
    sender: mpsc::Sender<CollectionRequest<C>>,
}

impl<C: Collection> Clone for CollectionClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Collection> CollectionClient<C> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<C>>) -> Self {
        Self { sender }
    }

    /// Appends an item. `Ok(None)` means admission declined and nothing was stored.
    pub async fn append(&self, params: C::Append) -> Result<Option<C::Item>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Append { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Appends an item and returns the contents as they stand right after it.
    pub async fn append_and_list(&self, params: C::Append) -> Result<Vec<C::Item>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::AppendAndList { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<C::Item>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn find(&self, key: C::Key) -> Result<Option<C::Item>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Find { key, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
