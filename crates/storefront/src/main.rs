//! # Storefront
//!
//! Starts the catalog and cart actors, registers a product, puts it in the cart and
//! logs the resulting total before shutting down.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=debug cargo run -p storefront
//! STOREFRONT_LOG_FORMAT=json cargo run -p storefront
//! ```

use anyhow::{anyhow, Context};
use rust_decimal::Decimal;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::{setup_tracing, Storefront};
use storefront::model::{Product, ProductId};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("failed to load configuration")?;

    // Setup tracing once for the entire application
    setup_tracing(&config.logging);

    info!(
        catalog_mailbox = config.catalog.capacity,
        cart_mailbox = config.cart.capacity,
        "Starting storefront"
    );

    let storefront = Storefront::new(&config);

    let span = tracing::info_span!("catalog_setup");
    async {
        info!("Registering products");
        storefront
            .catalog_client
            .add(Product::new(1, "Widget", "W1", Decimal::new(999, 2), 5))
            .await?;
        storefront
            .catalog_client
            .add(Product::new(2, "Gadget", "G1", Decimal::new(2000, 2), 3))
            .await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("shopping");
    let view = async {
        storefront.cart_client.add_item(ProductId(1)).await?;
        storefront.cart_client.add_item(ProductId(2)).await?;
        // Not in the catalog: the cart stays as it is
        storefront.cart_client.add_item(ProductId(999)).await?;
        storefront.cart_client.view().await
    }
    .instrument(span)
    .await?;

    info!(items = view.items.len(), total = %view.total, "Cart ready");
    match serde_json::to_string(&view) {
        Ok(json) => info!(%json, "Cart snapshot"),
        Err(e) => warn!(error = %e, "Cart snapshot could not be serialized"),
    }

    // Shutdown system gracefully
    storefront.shutdown().await.map_err(|e| anyhow!(e))?;

    info!("Application completed successfully");
    Ok(())
}
