//! Authentication test helpers
//!
//! Tokens signed the way the auth service signs them.

use axum::http::HeaderValue;
use workboard_reports::backend::auth::{create_token, Claims};

/// Secret shared by the test server and the tokens below
pub const TEST_SECRET: &str = "reports-test-secret";

/// Generate a token for a user with the given role
pub fn generate_test_token(user_id: &str, role: &str) -> String {
    create_token(&Claims::new(user_id, role), TEST_SECRET).expect("Failed to generate test token")
}

/// Generate a token signed with a different secret
pub fn generate_foreign_token(user_id: &str) -> String {
    create_token(&Claims::new(user_id, "membre"), "not-the-test-secret")
        .expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}

/// Generate a token shaped like the auth service's own: a numeric id, a
/// role and an issue time, no expiry
pub fn generate_auth_service_token(user_id: u64, role: &str) -> String {
    let claims = serde_json::json!({
        "id": user_id,
        "role": role,
        "iat": chrono::Utc::now().timestamp(),
    });
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to generate test token")
}
