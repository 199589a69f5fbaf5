//! Bearer Credential
//!
//! The caller's credential is forwarded verbatim to both upstream services.
//! `BearerToken` holds the bare token so that the `Bearer` scheme is added
//! exactly once no matter how the credential arrived.

use std::fmt;

use crate::shared::WireError;

const SCHEME: &str = "bearer";

/// A bare bearer token, without the `Bearer ` scheme prefix
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse a credential that may or may not carry the `Bearer` scheme
    ///
    /// Accepts `"Bearer abc"`, `"bearer abc"` and `"abc"`; surrounding
    /// whitespace is ignored. Empty tokens and tokens containing whitespace
    /// are rejected.
    pub fn parse(raw: &str) -> Result<Self, WireError> {
        let raw = raw.trim();
        let token = match raw.split_once(char::is_whitespace) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case(SCHEME) => rest.trim(),
            None if raw.eq_ignore_ascii_case(SCHEME) => "",
            _ => raw,
        };

        if token.is_empty() {
            return Err(WireError::credential("bearer token is empty"));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(WireError::credential("bearer token must not contain whitespace"));
        }

        Ok(Self(token.to_string()))
    }

    /// The bare token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens never show up in logs.
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
