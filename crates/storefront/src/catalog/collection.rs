//! Collection trait implementation for the catalog.
//!
//! The catalog admits every product it is given: no field is validated and duplicate
//! ids are stored side by side. Lookups by id return the earliest registration.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_actor::Collection;

use super::{Catalog, CatalogError};
use crate::model::{Product, ProductId};

#[async_trait]
impl Collection for Catalog {
    type Item = Arc<Product>;
    type Key = ProductId;
    type Append = Product;
    type Context = ();
    type Error = CatalogError;

    fn key_of(product: &Arc<Product>) -> &ProductId {
        &product.id
    }

    async fn admit(product: Product, _ctx: &()) -> Result<Option<Arc<Product>>, CatalogError> {
        Ok(Some(Arc::new(product)))
    }
}
