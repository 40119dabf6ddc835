//! Agency API - identity service for agency accounts.
//!
//! Registers agency accounts with validated profile data and media
//! assets, and authenticates returning agencies by email or agent
//! identifier, issuing a signed session cookie on success.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, media storage)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (response envelopes, violations)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Agency, AgencyProfile, Password, UserType};
pub use errors::{AppError, AppResult};
