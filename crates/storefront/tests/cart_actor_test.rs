use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::cart::CartError;
use storefront::catalog::Catalog;
use storefront::clients::CatalogClient;
use storefront::model::{Product, ProductId};
use storefront_actor::mock::MockClient;
use storefront_actor::FrameworkError;

/// Integration test: Real Cart actor with a mocked Catalog dependency.
/// This tests the cart's admission logic while isolating it from the Catalog actor.
///
/// Pattern 2: Actor + Mocks
/// - Real Cart actor (tests admission in Cart::admit)
/// - Mocked Catalog client (isolates the dependency)
#[tokio::test]
async fn test_cart_actor_with_mocked_catalog() {
    let widget = Arc::new(Product::new(1, "Widget", "W1", Decimal::new(999, 2), 5));

    // Cart::admit will call catalog_client.find_by_id() once per add_item
    let mut catalog_mock = MockClient::<Catalog>::new();
    catalog_mock
        .expect_find(ProductId(1))
        .return_ok(Some(widget.clone()));
    catalog_mock.expect_find(ProductId(999)).return_ok(None);

    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = storefront::cart::new(10);
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let contents = cart_client.add_item(ProductId(1)).await.unwrap();
    assert_eq!(contents.len(), 1);
    assert!(Arc::ptr_eq(&contents[0], &widget));

    // A miss is silent and returns the unchanged contents
    let contents = cart_client.add_item(ProductId(999)).await.unwrap();
    assert_eq!(contents.len(), 1);

    assert_eq!(cart_client.total().await.unwrap(), Decimal::new(999, 2));

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_catalog_is_reported_and_cart_unchanged() {
    let mut catalog_mock = MockClient::<Catalog>::new();
    catalog_mock
        .expect_find(ProductId(1))
        .return_err(FrameworkError::ActorClosed);

    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = storefront::cart::new(10);
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let result = cart_client.add_item(ProductId(1)).await;
    assert!(
        matches!(result, Err(CartError::CatalogUnavailable(_))),
        "unexpected result: {result:?}"
    );

    assert!(cart_client.list().await.unwrap().is_empty());
    assert_eq!(cart_client.total().await.unwrap(), Decimal::ZERO);

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}
