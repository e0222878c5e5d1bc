//! # Cart Client
//!
//! Provides a high‑level API for interacting with the `Cart` actor.
//! Totals are never stored: `total` and `view` sum prices over a fresh snapshot.
use std::sync::Arc;

use crate::cart::{Cart, CartError};
use crate::model::{cart_total, CartView, Product, ProductId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use storefront_actor::{ActorClient, CollectionClient, FrameworkError};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: CollectionClient<Cart>,
}

impl CartClient {
    pub fn new(inner: CollectionClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &CollectionClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_cart_error(e)
    }
}

// A rejected append carries the admission error, which is already a CartError.
fn map_cart_error(e: FrameworkError) -> CartError {
    match e {
        FrameworkError::Rejected(source) => match source.downcast::<CartError>() {
            Ok(cart_error) => *cart_error,
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        },
        other => CartError::ActorCommunicationError(other.to_string()),
    }
}

impl CartClient {
    /// Adds one unit of the catalog product with `product_id` and returns the cart
    /// contents afterwards.
    ///
    /// An id the catalog does not contain leaves the cart unchanged; the unchanged
    /// contents are returned and no error is raised.
    #[instrument(skip(self))]
    pub async fn add_item(&self, product_id: ProductId) -> Result<Vec<Arc<Product>>, CartError> {
        debug!("Sending request");
        let contents = self
            .inner
            .append_and_list(product_id)
            .await
            .map_err(map_cart_error)?;
        info!(size = contents.len(), "Cart updated");
        Ok(contents)
    }

    /// Every entry, in the order it was added.
    pub async fn list(&self) -> Result<Vec<Arc<Product>>, CartError> {
        <Self as ActorClient<Cart>>::list(self).await
    }

    /// Exact sum of the prices currently in the cart.
    #[instrument(skip(self))]
    pub async fn total(&self) -> Result<Decimal, CartError> {
        let items = self.list().await?;
        cart_total(&items).ok_or_else(|| overflow(items.len()))
    }

    /// The current entries together with their total, taken from one snapshot.
    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<CartView, CartError> {
        let items = self.list().await?;
        let size = items.len();
        CartView::new(items).ok_or_else(|| overflow(size))
    }
}

fn overflow(size: usize) -> CartError {
    warn!(size, "Cart total overflowed");
    CartError::TotalOverflow(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_actor::mock::{create_mock_client, expect_append_and_list, MockClient};

    fn priced(id: i64, cents: i64) -> Arc<Product> {
        Arc::new(Product::new(id, "Item", "SKU", Decimal::new(cents, 2), 1))
    }

    #[tokio::test]
    async fn test_add_item_sends_product_id() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move { cart_client.add_item(ProductId(7)).await });

        let (product_id, responder) = expect_append_and_list(&mut receiver)
            .await
            .expect("Expected AppendAndList request");
        assert_eq!(product_id, ProductId(7));

        responder.send(Ok(vec![priced(7, 100)])).unwrap();

        let contents = add_task.await.unwrap().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].id, ProductId(7));
    }

    #[tokio::test]
    async fn test_total_and_view_sum_the_snapshot() {
        let mut mock = MockClient::<Cart>::new();
        let items = vec![priced(1, 999), priced(2, 2000)];
        mock.expect_list().return_ok(items.clone());
        mock.expect_list().return_ok(items.clone());
        mock.expect_list().return_ok(vec![]);

        let cart_client = CartClient::new(mock.client());

        assert_eq!(cart_client.total().await.unwrap(), Decimal::new(2999, 2));

        let view = cart_client.view().await.unwrap();
        assert_eq!(view.items, items);
        assert_eq!(view.total, Decimal::new(2999, 2));

        assert_eq!(cart_client.total().await.unwrap(), Decimal::ZERO);
        mock.verify();
    }

    #[tokio::test]
    async fn test_rejected_append_keeps_cart_error() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_append_and_list()
            .return_err(FrameworkError::Rejected(Box::new(
                CartError::CatalogUnavailable("Actor closed".to_string()),
            )));

        let cart_client = CartClient::new(mock.client());
        let result = cart_client.add_item(ProductId(1)).await;

        assert_eq!(
            result,
            Err(CartError::CatalogUnavailable("Actor closed".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_total_overflow_is_an_error() {
        let mut mock = MockClient::<Cart>::new();
        let big = Arc::new(Product::new(1, "Big", "B", Decimal::MAX, 1));
        mock.expect_list().return_ok(vec![big.clone(), big.clone()]);
        mock.expect_list().return_ok(vec![big.clone(), big]);

        let cart_client = CartClient::new(mock.client());

        assert_eq!(cart_client.total().await, Err(CartError::TotalOverflow(2)));
        assert_eq!(cart_client.view().await, Err(CartError::TotalOverflow(2)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_cart_maps_to_communication_error() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);

        let cart_client = CartClient::new(mock.client());
        let result = cart_client.total().await;

        assert!(matches!(result, Err(CartError::ActorCommunicationError(_))));
        mock.verify();
    }
}
