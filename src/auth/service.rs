use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::access::Role;
use crate::error::ApiError;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id as string)
    pub sub: String,
    /// Role at token issue time ("admin" | "staff" | "shipper")
    pub role: String,
    /// Expiration (UTC timestamp)
    pub exp: usize,
    /// Issued at
    pub iat: usize,
}

/// Password hashing and token issuing/verification.
///
/// Hashing happens only on explicit create / password-change calls; there
/// is no save-hook magic anywhere in the persistence layer.
#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
    token_ttl_hours: i64,
}

impl AuthService {
    pub fn new(jwt_secret: String, token_ttl_hours: i64) -> Self {
        Self {
            jwt_secret,
            token_ttl_hours,
        }
    }

    /// Hash a raw password into a PHC string.
    pub fn hash_password(&self, raw: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?
            .to_string();
        Ok(hash)
    }

    /// Verify a raw password against a stored PHC hash.
    pub fn verify_password(&self, raw: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }

    /// Issue a JWT carrying user id and role.
    pub fn issue_token(&self, user_id: i64, role: Role) -> Result<String, ApiError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(Duration::hours(self.token_ttl_hours))
            .ok_or_else(|| anyhow::anyhow!("Token expiry overflow"))?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))?;

        Ok(token)
    }

    /// Verify a JWT and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|_| ApiError::auth("Invalid or expired token"))?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("test-secret".to_string(), 24)
    }

    #[test]
    fn test_hash_and_verify_password() {
        let svc = service();
        let hash = svc.hash_password("s3cret-pw").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(svc.verify_password("s3cret-pw", &hash));
        assert!(!svc.verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let svc = service();
        assert!(!svc.verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_token_round_trip_preserves_role() {
        let svc = service();
        let token = svc.issue_token(42, Role::Shipper).unwrap();
        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "shipper");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = service().issue_token(1, Role::Admin).unwrap();
        let other = AuthService::new("different-secret".to_string(), 24);
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = service();
        let mut token = svc.issue_token(1, Role::Staff).unwrap();
        token.push('x');
        assert!(svc.verify_token(&token).is_err());
    }
}
