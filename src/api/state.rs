//! Application state - dependency injection container.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::services::{AuthService, ServiceContainer, Services};

/// Application state shared across handlers.
///
/// Holds the raw connection rather than the `Database` wrapper so
/// routers can be exercised against a mock connection in tests.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database connection, used by the health endpoint
    pub database: DatabaseConnection,
}

impl AppState {
    /// Create application state with the full service graph wired from
    /// a database connection and config.
    pub fn from_config(database: DatabaseConnection, config: &Config) -> Self {
        let container = Services::from_connection(database.clone(), config);

        Self {
            auth_service: container.auth(),
            database,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(auth_service: Arc<dyn AuthService>, database: DatabaseConnection) -> Self {
        Self {
            auth_service,
            database,
        }
    }
}
