//! # ActorClient Trait
//!
//! Provides a common interface for collection-specific clients, adding default `list`
//! and `find` methods built on top of a generic `CollectionClient`.
use crate::{Collection, CollectionClient, FrameworkError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use storefront_actor::{ActorClient, Collection, CollectionClient, FrameworkError};
/// use async_trait::async_trait;
///
/// // 1. Define the collection
/// #[derive(Debug)]
/// struct Names;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NameError(String);
///
/// impl From<String> for NameError {
///     fn from(s: String) -> Self { NameError(s) }
/// }
///
/// #[async_trait]
/// impl Collection for Names {
///     type Item = Arc<String>;
///     type Key = String;
///     type Append = String;
///     type Context = ();
///     type Error = NameError;
///
///     fn key_of(item: &Arc<String>) -> &String { item }
///     async fn admit(name: String, _: &()) -> Result<Option<Arc<String>>, NameError> {
///         Ok(Some(Arc::new(name)))
///     }
/// }
///
/// // 2. Define the client wrapper
/// struct NameClient {
///     inner: CollectionClient<Names>,
/// }
///
/// // 3. Implement ActorClient
/// #[async_trait]
/// impl ActorClient<Names> for NameClient {
///     type Error = NameError;
///
///     fn inner(&self) -> &CollectionClient<Names> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NameError(e.to_string())
///     }
/// }
///
/// // 4. Usage: list() and find() come for free
/// async fn usage(client: NameClient) {
///     let _ = client.list().await;
///     let _ = client.find("alice".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<C: Collection>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<C>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Every item, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<C::Item>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// The first item, in insertion order, stored under `key`.
    #[tracing::instrument(skip(self))]
    async fn find(&self, key: C::Key) -> Result<Option<C::Item>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(key).await.map_err(Self::map_error)
    }
}
