//! # Storefront System
//!
//! Owns the catalog and cart actors for the lifetime of the process and hands out their
//! clients.

use tracing::{error, info};

use crate::clients::{CartClient, CatalogClient};
use crate::config::StorefrontConfig;

/// The runtime orchestrator for the storefront.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: starting and stopping the catalog and cart actors
/// - **Dependency Wiring**: handing the cart a `CatalogClient` to resolve product ids
///
/// There is no global state: whoever handles requests receives the clients from this
/// struct (they are cheap to clone) and one `Storefront` lives as long as the process.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(&StorefrontConfig::default());
///
/// storefront.catalog_client.add(product).await?;
/// let contents = storefront.cart_client.add_item(ProductId(1)).await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the catalog actor
    pub catalog_client: CatalogClient,

    /// Client for the cart actor
    pub cart_client: CartClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Creates both actors and spawns them. Must be called inside a Tokio runtime.
    pub fn new(config: &StorefrontConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog_client) = crate::catalog::new(config.catalog.capacity);
        let (cart_actor, cart_client) = crate::cart::new(config.cart.capacity);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(catalog_client.clone()));

        Self {
            catalog_client,
            cart_client,
            handles: vec![cart_handle, catalog_handle],
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the cart client stops the cart actor, which drops its catalog client;
    /// once ours is dropped too the catalog actor stops. Clones handed out elsewhere
    /// keep their actor alive, so drop them before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
