//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the `Catalog` actor.
//! It wraps a `CollectionClient<Catalog>` and exposes domain‑specific methods.
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use storefront_actor::{ActorClient, CollectionClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: CollectionClient<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: CollectionClient<Catalog>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Catalog> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &CollectionClient<Catalog> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}

impl CatalogClient {
    /// Registers a product at the end of the catalog.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&self, product: Product) -> Result<(), CatalogError> {
        debug!(?product, "Sending request");
        self.inner
            .append(product)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Every registered product, in registration order.
    pub async fn list(&self) -> Result<Vec<Arc<Product>>, CatalogError> {
        <Self as ActorClient<Catalog>>::list(self).await
    }

    /// The first product registered under `id`, if any.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ProductId) -> Result<Option<Arc<Product>>, CatalogError> {
        self.find(id).await
    }
}
