//! # Storefront Library
//!
//! A minimal in-memory storefront: a catalog of products and a shopping cart that
//! references them. Each collection is owned by its own actor; see [`storefront_actor`]
//! for the underlying framework.
//!
//! - **[model]**: [`Product`](model::Product), [`ProductId`](model::ProductId) and the
//!   [`CartView`](model::CartView) snapshot.
//! - **[catalog]** / **[cart]**: the two collections and their errors.
//! - **[clients]**: typed wrappers ([`CatalogClient`](clients::CatalogClient),
//!   [`CartClient`](clients::CartClient)) that hide the message passing.
//! - **[config]**: mailbox and logging settings, overridable from the environment.
//! - **[lifecycle]**: starts, wires and stops the actors.

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
