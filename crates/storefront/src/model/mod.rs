//! Plain data: the [`Product`] both collections store, and the [`CartView`] handed to renderers.

pub mod cart_view;
pub mod product;

pub use cart_view::*;
pub use product::*;
