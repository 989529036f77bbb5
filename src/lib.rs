//! Shipflow: a role-based shipment order management backend.
//!
//! The gateway exposes a JSON API over PostgreSQL: JWT authentication
//! with admin/staff/shipper roles, service types with weight-tiered
//! pricing rules, and a shipment order lifecycle priced through those
//! rules at creation.

pub mod access;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod pricing;
pub mod users;
pub mod validation;

pub use access::{Capability, OrderScope, Role};
pub use config::AppConfig;
pub use error::ApiError;
