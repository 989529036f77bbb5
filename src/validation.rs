//! Request validation helpers shared by the handlers.

use validator::{Validate, ValidationError};

use crate::error::ApiError;

/// Run derive-based validation and flatten the result into the
/// `errors: [..]` list the API returns.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate().map_err(|errs| {
        let mut messages: Vec<String> = errs
            .field_errors()
            .iter()
            .flat_map(|(field, field_errs)| {
                field_errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{} {}", field, msg),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages)
    })
}

/// Phone charset check: digits plus `+ - ( )` and spaces.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let ok = !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_common_formats() {
        assert!(validate_phone("0901234567").is_ok());
        assert!(validate_phone("+84 90 123-4567").is_ok());
        assert!(validate_phone("(028) 3822 9999").is_ok());
    }

    #[test]
    fn test_phone_rejects_letters_and_empty() {
        assert!(validate_phone("").is_err());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("090#123").is_err());
    }
}
