//! Authentication Module
//!
//! Verification of bearer credentials issued by the auth service. The
//! reports service does not register, log in or store users; it only checks
//! that a caller presents a token signed with the shared secret and reads
//! the identity out of it.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── sessions.rs     - JWT claims and verification
//! ```
//!
//! The request-level check lives in `backend::middleware::auth`.

/// JWT claims and verification
pub mod sessions;

pub use sessions::{create_token, verify_token, Claims};
