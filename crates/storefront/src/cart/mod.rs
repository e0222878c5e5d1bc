//! # Cart Actor
//!
//! The cart is the ordered list of products a shopper has selected. Each `add_item`
//! call appends one entry, so adding the same id twice yields two entries. Nothing is
//! ever removed.
//!
//! ## Overview
//!
//! The cart depends on the catalog: its context is a
//! [`CatalogClient`](crate::clients::CatalogClient), which admission uses to turn a
//! product id into the catalog's product. Because the lookup runs inside the cart
//! actor's turn, the lookup, the append and the reply form one step that no other cart
//! request can interleave with.
//!
//! ## Structure
//!
//! - [`collection`] - [`Collection`](storefront_actor::Collection) implementation for [`Cart`]
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::{cart, catalog};
//! use storefront::model::{Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (catalog_actor, catalog_client) = catalog::new(32);
//!     let (cart_actor, cart_client) = cart::new(32);
//!
//!     // The cart gets the catalog client as its context
//!     tokio::spawn(catalog_actor.run(()));
//!     tokio::spawn(cart_actor.run(catalog_client.clone()));
//!
//!     catalog_client
//!         .add(Product::new(1, "Widget", "W1", Decimal::new(999, 2), 5))
//!         .await?;
//!
//!     let contents = cart_client.add_item(ProductId(1)).await?;
//!     assert_eq!(contents.len(), 1);
//!
//!     // Unknown ids leave the cart as it was
//!     let contents = cart_client.add_item(ProductId(999)).await?;
//!     assert_eq!(contents.len(), 1);
//!
//!     assert_eq!(cart_client.total().await?, Decimal::new(999, 2));
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use storefront_actor::CollectionActor;

/// Marker type naming the cart collection.
#[derive(Debug)]
pub struct Cart;

/// Creates a new Cart actor and its client.
pub fn new(mailbox_capacity: usize) -> (CollectionActor<Cart>, CartClient) {
    let (actor, generic_client) = CollectionActor::new(mailbox_capacity);
    (actor, CartClient::new(generic_client))
}
