//! # System Lifecycle & Orchestration
//!
//! This module starts the storefront's two actors, wires the cart to the catalog, and
//! shuts them down again.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first, without dependencies, and receive them when they start:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog_client) = catalog::new(capacity);
//! let (cart_actor, cart_client) = cart::new(capacity);
//!
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(cart_actor.run(catalog_client.clone()));
//! ```
//!
//! The cart depends on the catalog and never the other way round, so the graph is
//! acyclic and closing channels is enough to stop everything.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors log their final size** and exit
//! 4. **Await completion** - wait for both tasks to finish
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod storefront;
pub mod tracing;

pub use storefront::*;
pub use tracing::*;
