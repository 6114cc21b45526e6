use crate::{errors::ApiError, models::User, states::AppState};
use axum::http::{HeaderMap, header};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Token lifetime handed out by login and register.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 30;
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user email)
    pub exp: usize,
}

pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    hash(plain, DEFAULT_COST)
        .map_err(|e| ApiError::InternalError(format!("Password hashing failed: {}", e)))
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, ApiError> {
    verify(plain, hashed)
        .map_err(|e| ApiError::InternalError(format!("Password verification failed: {}", e)))
}

pub fn create_token(email: &str, secret: &str, ttl: Option<Duration>) -> Result<String, ApiError> {
    let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| ApiError::InternalError("Failed to calculate expiration".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: email.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::InternalError(format!("Token creation failed: {}", e)))
}

/// Verifies signature and expiry; any failure is an auth failure.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized)
}

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    // Check for "Bearer " prefix
    if !auth_header.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized);
    }

    Ok(&auth_header[7..])
}

/// Resolves the bearer token on a request to the stored user it belongs to.
/// Every identity-gated handler goes through here.
pub fn current_user(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    let token = bearer_token(headers)?;
    let claims = decode_token(token, &state.config.jwt_secret)?;

    let user = state.users.get(&claims.sub).ok_or(ApiError::Unauthorized)?;

    Ok(user.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn password_hash_verifies() {
        let hashed = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hashed).unwrap());
        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn token_roundtrip_keeps_subject() {
        let token = create_token("alice@example.com", SECRET, None).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = create_token("alice@example.com", SECRET, Some(Duration::minutes(-5))).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("alice@example.com", SECRET, None).unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn bearer_header_is_required() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }
}
