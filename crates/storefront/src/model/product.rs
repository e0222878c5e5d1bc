//! Represents a product registered in the catalog.
//!
//! # Collections
//! Products are stored as `Arc<Product>` by both the [`Catalog`](crate::catalog::Catalog)
//! and the [`Cart`](crate::cart::Cart). A cart entry is the very allocation the catalog
//! holds, never a copy.
//!
//! No field is validated: a negative price or stock, an empty name, or an id already
//! used by another product are all stored exactly as given.

use rust_decimal::Decimal;
use serde::Serialize;

use std::fmt::Display;

/// Identifier for Products. Not guaranteed unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub stock: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier shoppers add the product to their cart by
    /// * `name` - Display name
    /// * `sku` - Stock keeping unit
    /// * `price` - Unit price
    /// * `stock` - Informational stock count; never decremented
    pub fn new(
        id: i64,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: Decimal,
        stock: i64,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            sku: sku.into(),
            price,
            stock,
        }
    }
}
