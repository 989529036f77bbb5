//! Service types and weight-tiered pricing.
//!
//! A service type (standard, express, ...) owns a set of pricing rules.
//! Each active rule covers a closed weight interval `[weight_from,
//! weight_to]` with a per-kg price and optional flat surcharges; active
//! intervals of the same service type must never overlap. Cost computation
//! looks up the tier for a weight and is otherwise pure arithmetic.

pub mod calculator;
pub mod handlers;
pub mod models;
pub mod store;

pub use calculator::{calculate_cost, quote, round_to_cents};
pub use models::{PricingRule, ServiceType};
pub use store::{PricingStore, ranges_overlap};
