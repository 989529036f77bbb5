use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_phone;

/// Order lifecycle states.
///
/// Forward flow is pending -> processing -> shipping -> delivered, with
/// cancelled reachable from pending. Status updates only check enum
/// membership; field edits and deletes are what the pending gate protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipping,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipping" => Ok(OrderStatus::Shipping),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipment order as returned by the API, with the joined service type
/// and creator names.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_code: String,
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub service_type_id: i64,
    pub service_type_name: Option<String>,
    pub weight: Decimal,
    pub is_fragile: bool,
    pub is_valuable: bool,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_by: Option<i64>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub sender_name: String,
    #[validate(custom(function = validate_phone, message = "must be a valid phone number"))]
    pub sender_phone: String,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub sender_address: String,
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub receiver_name: String,
    #[validate(custom(function = validate_phone, message = "must be a valid phone number"))]
    pub receiver_phone: String,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub receiver_address: String,
    pub service_type_id: i64,
    pub weight: Decimal,
    #[serde(default)]
    pub is_fragile: bool,
    #[serde(default)]
    pub is_valuable: bool,
    #[validate(length(max = 1000, message = "must be no more than 1000 characters"))]
    pub notes: Option<String>,
}

/// Field edits allowed while an order is still pending. Absent fields
/// keep their stored values.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub sender_name: Option<String>,
    #[validate(custom(function = validate_phone, message = "must be a valid phone number"))]
    pub sender_phone: Option<String>,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub sender_address: Option<String>,
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub receiver_name: Option<String>,
    #[validate(custom(function = validate_phone, message = "must be a valid phone number"))]
    pub receiver_phone: Option<String>,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub receiver_address: Option<String>,
    pub service_type_id: Option<i64>,
    pub weight: Option<Decimal>,
    pub is_fragile: Option<bool>,
    pub is_valuable: Option<bool>,
    #[validate(length(max = 1000, message = "must be no more than 1000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Query parameters for the order listing.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub service_type_id: Option<i64>,
    /// Case-insensitive match on order code or either party's name/phone
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Query parameters for the stats endpoint.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatsQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Aggregate counts and revenue over the visible orders.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: i64,
    pub pending: i64,
    pub processing: i64,
    pub shipping: i64,
    pub delivered: i64,
    pub cancelled: i64,
    /// Sum of total_amount over delivered orders
    pub revenue: Decimal,
    pub by_service_type: Vec<ServiceTypeStat>,
}

/// Order count and delivered revenue for one service type.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeStat {
    pub service_type_id: i64,
    pub service_type_name: Option<String>,
    pub count: i64,
    pub revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("Pending".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipping).unwrap();
        assert_eq!(json, "\"shipping\"");
        let back: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }
}
