use rust_decimal::Decimal;

use shipflow::access::{Capability, OrderScope, Role};
use shipflow::orders::OrderStatus;
use shipflow::pricing::models::PricingRule;
use shipflow::pricing::{calculate_cost, ranges_overlap, round_to_cents};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Helper to build a rule without touching the database
fn rule(price: &str, fragile: Option<&str>, valuable: Option<&str>) -> PricingRule {
    PricingRule {
        id: 1,
        service_type_id: 1,
        weight_from: d("0"),
        weight_to: d("5"),
        price: d(price),
        fragile_surcharge: fragile.map(d),
        valuable_surcharge: valuable.map(d),
        is_active: true,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

#[test]
fn cost_combines_weight_price_and_surcharges() {
    let r = rule("15000", Some("5000"), Some("10000"));

    // 15000 * 0.8 + 5000
    assert_eq!(calculate_cost(&r, d("0.8"), true, false), d("17000.00"));
    // both surcharges
    assert_eq!(calculate_cost(&r, d("0.8"), true, true), d("27000.00"));
    // no surcharges
    assert_eq!(calculate_cost(&r, d("2"), false, false), d("30000.00"));
}

#[test]
fn missing_surcharges_count_as_zero() {
    let r = rule("10000", None, None);
    assert_eq!(calculate_cost(&r, d("1"), true, true), d("10000.00"));
}

#[test]
fn totals_round_half_away_from_zero() {
    assert_eq!(round_to_cents(d("17000.005")), d("17000.01"));
    assert_eq!(round_to_cents(d("17000.004")), d("17000.00"));
}

#[test]
fn closed_intervals_share_endpoints() {
    assert!(ranges_overlap(d("0"), d("1"), d("1"), d("2")));
    assert!(!ranges_overlap(d("0"), d("1"), d("1.01"), d("2")));
    // the candidate [0.5, 2] against an existing [0, 1]
    assert!(ranges_overlap(d("0.5"), d("2"), d("0"), d("1")));
}

#[test]
fn role_capability_matrix() {
    for cap in [
        Capability::ViewOrders,
        Capability::CreateOrder,
        Capability::ManagePricing,
        Capability::ManageUsers,
        Capability::DeleteOrder,
    ] {
        assert!(Role::Admin.allows(cap), "admin must allow {cap:?}");
    }

    assert!(Role::Staff.allows(Capability::CreateOrder));
    assert!(Role::Staff.allows(Capability::UpdateOrderFields));
    assert!(!Role::Staff.allows(Capability::DeleteOrder));
    assert!(!Role::Staff.allows(Capability::ManagePricing));

    assert!(Role::Shipper.allows(Capability::ViewOrders));
    assert!(Role::Shipper.allows(Capability::UpdateOrderStatus));
    assert!(!Role::Shipper.allows(Capability::CreateOrder));
    assert!(!Role::Shipper.allows(Capability::UpdateOrderFields));
}

#[test]
fn scope_narrows_for_non_admins() {
    assert_eq!(Role::Admin.order_scope(3), OrderScope::All);
    assert_eq!(Role::Staff.order_scope(3), OrderScope::Own(3));
    assert_eq!(Role::Shipper.order_scope(3), OrderScope::Own(3));

    assert!(OrderScope::Own(3).permits(Some(3)));
    assert!(!OrderScope::Own(3).permits(Some(4)));
}

#[test]
fn order_status_names_are_stable() {
    let expected = ["pending", "processing", "shipping", "delivered", "cancelled"];
    let actual: Vec<_> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(actual, expected);
}
