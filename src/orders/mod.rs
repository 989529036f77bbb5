//! Shipment orders: creation, lifecycle, scoped listing and stats.
//!
//! Orders are priced at creation through the pricing tiers and carry a
//! generated, unique order code. Field edits and deletes are limited to
//! pending orders; status moves only check enum membership.

pub mod code;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod store;

pub use filter::OrderFilter;
pub use models::{Order, OrderStatus};
pub use store::OrderStore;
