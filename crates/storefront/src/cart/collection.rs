//! Collection trait implementation for the cart.
//!
//! An append carries only a product id. Admission resolves it against the catalog
//! (the actor's injected context) and stores the catalog's own `Arc<Product>`, so cart
//! entries and catalog entries are the same allocation. Ids the catalog does not know
//! are declined without error.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_actor::Collection;
use tracing::debug;

use super::{Cart, CartError};
use crate::clients::CatalogClient;
use crate::model::{Product, ProductId};

#[async_trait]
impl Collection for Cart {
    type Item = Arc<Product>;
    type Key = ProductId;
    type Append = ProductId;
    type Context = CatalogClient;
    type Error = CartError;

    fn key_of(product: &Arc<Product>) -> &ProductId {
        &product.id
    }

    async fn admit(
        product_id: ProductId,
        catalog: &CatalogClient,
    ) -> Result<Option<Arc<Product>>, CartError> {
        let product = catalog
            .find_by_id(product_id)
            .await
            .map_err(|e| CartError::CatalogUnavailable(e.to_string()))?;

        if product.is_none() {
            debug!(%product_id, "Not in catalog, cart unchanged");
        }
        Ok(product)
    }
}
