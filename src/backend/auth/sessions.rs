/**
 * Session Tokens
 *
 * Verification of the JWTs issued by the auth service. Tokens are signed
 * with HS256 using a secret shared between the services and carry the
 * caller's user id and role.
 *
 * The auth service issues tokens without an expiry, so `exp` is optional
 * here. When it is present it is enforced. It signs the numeric
 * auto-incremented user id; string ids are accepted as well.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::workboard::user_id;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    #[serde(deserialize_with = "user_id")]
    pub id: String,
    /// Role (`admin`, `membre` or `invité`)
    #[serde(default = "default_role")]
    pub role: String,
    /// Issued at time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

fn default_role() -> String {
    "membre".to_string()
}

impl Claims {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            iat: None,
            exp: None,
        }
    }

    pub fn expires_at(mut self, exp: u64) -> Self {
        self.exp = Some(exp);
        self
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - JWT token string, without the `Bearer ` scheme
/// * `secret` - Secret shared with the auth service
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &validation())?;
    Ok(token_data.claims)
}

/// Sign claims into a JWT token
///
/// The reports service never issues tokens to callers; this exists for
/// tooling and tests that need a token the verifier accepts.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &key)
}
