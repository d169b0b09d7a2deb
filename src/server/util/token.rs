//! Opaque bearer tokens and signed password reset tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifetime of a password reset token in seconds.
pub const RESET_TOKEN_EXPIRES_IN: i64 = 600;

/// Generates a bearer token of 16 random bytes, hex encoded to 32 characters.
pub fn generate_bearer_token() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    hex::encode(bytes)
}

#[derive(Debug, Serialize, Deserialize)]
struct ResetClaims {
    /// Id of the user allowed to reset their password.
    reset_password: i32,
    exp: i64,
}

/// Signs a password reset token for `user_id` with HS256.
///
/// # Arguments
/// - `user_id` - User whose password may be reset
/// - `secret` - Application secret key
/// - `expires_in` - Lifetime in seconds
///
/// # Returns
/// - `Ok(String)` - Encoded JWT
/// - `Err(jsonwebtoken::errors::Error)` - Signing failed
pub fn encode_reset_token(
    user_id: i32,
    secret: &str,
    expires_in: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = ResetClaims {
        reset_password: user_id,
        exp: Utc::now().timestamp() + expires_in,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies a password reset token and returns the user id it was issued for.
///
/// Returns `None` for a bad signature, malformed token or expired token.
pub fn decode_reset_token(token: &str, secret: &str) -> Option<i32> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<ResetClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.reset_password)
    .map_err(|e| tracing::debug!("Rejected reset token: {}", e))
    .ok()
}
