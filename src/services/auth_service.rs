use actix_web::HttpRequest;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::error::ApiError;
use crate::models::user::{User, UserRole};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id (ObjectId hex).
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(jwt_secret: &str, token_ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ApiError::InternalError(format!("Failed to hash password: {}", e)))
    }

    pub fn verify_password(&self, hash: &str, password: &str) -> Result<bool, ApiError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| ApiError::InternalError(format!("Stored password hash is invalid: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    pub fn issue_token(&self, user: &User) -> Result<String, ApiError> {
        let user_id = user
            .id
            .map(|id| id.to_hex())
            .ok_or_else(|| ApiError::InternalError("User has no id".to_string()))?;

        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role: user.role.clone(),
            iat: now.timestamp() as usize,
            exp: (now + self.token_ttl).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::InternalError(format!("Failed to sign token: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))
    }

    /// Pulls the bearer token off the request and verifies it.
    pub fn authenticate(&self, req: &HttpRequest) -> Result<Claims, ApiError> {
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected a bearer token".to_string()))?;

        self.verify_token(token)
    }

    /// Role is a field on the user document carried into the token, it is not
    /// a claim verified by an external provider.
    pub fn require_admin(&self, req: &HttpRequest) -> Result<Claims, ApiError> {
        let claims = self.authenticate(req)?;
        if claims.role != UserRole::Admin {
            return Err(ApiError::Forbidden("Admin role required".to_string()));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn service() -> AuthService {
        AuthService::new("test-secret", 24)
    }

    fn user(role: UserRole) -> User {
        let mut user = User::new(
            "ayu@example.com".to_string(),
            "unused".to_string(),
            "Ayu".to_string(),
            None,
            role,
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let auth = service();
        let hash = auth.hash_password("rahasia123").unwrap();

        assert!(auth.verify_password(&hash, "rahasia123").unwrap());
        assert!(!auth.verify_password(&hash, "salah").unwrap());
    }

    #[test]
    fn test_token_roundtrip_carries_role() {
        let auth = service();
        let user = user(UserRole::Admin);
        let token = auth.issue_token(&user).unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.unwrap().to_hex());
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let auth = service();
        let token = auth.issue_token(&user(UserRole::Customer)).unwrap();
        let other = AuthService::new("different-secret", 24);

        assert!(other.verify_token(&token).is_err());
    }
}
