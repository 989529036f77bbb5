//! Cost calculation.
//!
//! Pure and deterministic given the matched rule: the tier lookup lives in
//! the store, everything here is arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::pricing::models::{PricingRule, Quote};

/// Round to 2 decimal places, half away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Total cost for a shipment priced against a matched tier:
/// `price * weight` plus the flat surcharges for the set flags. A missing
/// surcharge counts as zero.
pub fn calculate_cost(
    rule: &PricingRule,
    weight: Decimal,
    is_fragile: bool,
    is_valuable: bool,
) -> Decimal {
    let mut total = rule.price * weight;
    if is_fragile {
        total += rule.fragile_surcharge.unwrap_or(Decimal::ZERO);
    }
    if is_valuable {
        total += rule.valuable_surcharge.unwrap_or(Decimal::ZERO);
    }
    round_to_cents(total)
}

/// Full quote breakdown for the matched tier.
pub fn quote(rule: &PricingRule, weight: Decimal, is_fragile: bool, is_valuable: bool) -> Quote {
    let fragile_fee = if is_fragile {
        rule.fragile_surcharge.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let valuable_fee = if is_valuable {
        rule.valuable_surcharge.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    Quote {
        base_price: rule.price,
        weight,
        fragile_fee,
        valuable_fee,
        total_cost: calculate_cost(rule, weight, is_fragile, is_valuable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn rule(
        price: &str,
        fragile: Option<&str>,
        valuable: Option<&str>,
    ) -> PricingRule {
        PricingRule {
            id: 1,
            service_type_id: 1,
            weight_from: Decimal::ZERO,
            weight_to: Decimal::ONE,
            price: price.parse().unwrap(),
            fragile_surcharge: fragile.map(|s| s.parse().unwrap()),
            valuable_surcharge: valuable.map(|s| s.parse().unwrap()),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_standard_tier_with_fragile_surcharge() {
        // 15000 * 0.8 + 5000 = 17000.00
        let r = rule("15000", Some("5000"), Some("10000"));
        let total = calculate_cost(&r, d("0.8"), true, false);
        assert_eq!(total, d("17000.00"));
    }

    #[test]
    fn test_both_surcharges() {
        let r = rule("15000", Some("5000"), Some("10000"));
        let total = calculate_cost(&r, d("0.8"), true, true);
        assert_eq!(total, d("27000.00"));
    }

    #[test]
    fn test_missing_surcharge_counts_as_zero() {
        let r = rule("12000", None, None);
        assert_eq!(calculate_cost(&r, d("2"), true, true), d("24000.00"));
    }

    #[test]
    fn test_flags_off_ignore_surcharges() {
        let r = rule("12000", Some("5000"), Some("10000"));
        assert_eq!(calculate_cost(&r, d("2"), false, false), d("24000.00"));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_to_cents(d("2.345")), d("2.35"));
        assert_eq!(round_to_cents(d("2.344")), d("2.34"));
        assert_eq!(round_to_cents(d("17000")), d("17000"));

        // 9.99 * 0.333 = 3.32667 -> 3.33
        let r = rule("9.99", None, None);
        assert_eq!(calculate_cost(&r, d("0.333"), false, false), d("3.33"));
    }

    #[test]
    fn test_deterministic() {
        let r = rule("15000", Some("5000"), None);
        let a = calculate_cost(&r, d("0.8"), true, false);
        let b = calculate_cost(&r, d("0.8"), true, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_quote_breakdown() {
        let r = rule("15000", Some("5000"), Some("10000"));
        let q = quote(&r, d("0.8"), true, false);
        assert_eq!(q.base_price, d("15000"));
        assert_eq!(q.fragile_fee, d("5000"));
        assert_eq!(q.valuable_fee, Decimal::ZERO);
        assert_eq!(q.total_cost, d("17000.00"));
    }
}
