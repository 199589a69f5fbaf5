//! Server Module
//!
//! Server initialization and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading from the environment
//! └── init.rs         - Application creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `config::load_config` reads the environment
//! 2. **State Creation**: the upstream client and config go into `AppState`
//! 3. **Router Creation**: routes and middleware are attached

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::load_config;
pub use init::create_app;
pub use state::AppState;
