//! Order code generation.
//!
//! Codes look like `ORD482913057`: the `ORD` prefix, the last six digits
//! of the current epoch milliseconds, and three random digits. The code
//! is not guaranteed unique by construction; the orders table enforces
//! that with a unique index and creation retries on collision.

use chrono::Utc;
use rand::Rng;

/// How many collisions creation tolerates before giving up.
pub const MAX_CODE_ATTEMPTS: u32 = 5;

pub fn generate_order_code() -> String {
    let millis = Utc::now().timestamp_millis() % 1_000_000;
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("ORD{millis:06}{suffix:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let code = generate_order_code();
        assert_eq!(code.len(), 12);
        assert!(code.starts_with("ORD"));
        assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_codes_mostly_distinct() {
        let codes: std::collections::HashSet<_> =
            (0..50).map(|_| generate_order_code()).collect();
        // 50 draws from a million-value space; a few collisions would be fine
        assert!(codes.len() > 40);
    }
}
