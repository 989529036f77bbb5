use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A category of shipping offering that owns its own pricing tiers.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A weight tier: closed interval `[weight_from, weight_to]` mapped to a
/// per-kg price plus optional flat surcharges.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    pub id: i64,
    pub service_type_id: i64,
    pub weight_from: Decimal,
    pub weight_to: Decimal,
    /// Price per kg
    pub price: Decimal,
    pub fragile_surcharge: Option<Decimal>,
    pub valuable_surcharge: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceTypeRequest {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "must be no more than 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceTypeRequest {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "must be no more than 500 characters"))]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePricingRuleRequest {
    pub service_type_id: i64,
    pub weight_from: Decimal,
    pub weight_to: Decimal,
    pub price: Decimal,
    pub fragile_surcharge: Option<Decimal>,
    pub valuable_surcharge: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingRuleRequest {
    pub weight_from: Option<Decimal>,
    pub weight_to: Option<Decimal>,
    pub price: Option<Decimal>,
    pub fragile_surcharge: Option<Decimal>,
    pub valuable_surcharge: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Cost quote request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub service_type_id: i64,
    pub weight: Decimal,
    #[serde(default)]
    pub is_fragile: bool,
    #[serde(default)]
    pub is_valuable: bool,
}

/// Cost quote breakdown.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Per-kg price of the matched tier
    pub base_price: Decimal,
    pub weight: Decimal,
    pub fragile_fee: Decimal,
    pub valuable_fee: Decimal,
    pub total_cost: Decimal,
}

/// Query parameters for the admin rule listing.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingRuleListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub service_type_id: Option<i64>,
}

/// Query parameters for the admin service-type listing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ServiceTypeListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
