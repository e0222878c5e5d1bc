//! # Catalog Actor
//!
//! The catalog is the ordered list of every product registered for sale. It only grows:
//! products are appended in registration order, which is also the order they are
//! displayed in.
//!
//! ## Structure
//!
//! - [`collection`] - [`Collection`](storefront_actor::Collection) implementation for [`Catalog`]
//! - [`error`] - [`CatalogError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::catalog;
//! use storefront::model::{Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog::new(32);
//!
//!     // The catalog has no dependencies, so its context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .add(Product::new(1, "Widget", "W1", Decimal::new(999, 2), 5))
//!         .await?;
//!
//!     let widget = client.find_by_id(ProductId(1)).await?;
//!     assert_eq!(widget.unwrap().name, "Widget");
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Append-only**: no update or removal exists
//! - **First match wins**: ids are not required to be unique, and `find_by_id` returns
//!   the product registered first

pub mod collection;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use storefront_actor::CollectionActor;

/// Marker type naming the catalog collection.
#[derive(Debug)]
pub struct Catalog;

/// Creates a new Catalog actor and its client.
pub fn new(mailbox_capacity: usize) -> (CollectionActor<Catalog>, CatalogClient) {
    let (actor, generic_client) = CollectionActor::new(mailbox_capacity);
    (actor, CatalogClient::new(generic_client))
}
