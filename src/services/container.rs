//! Service container - centralized service access.
//!
//! Wires the concrete repository, media store and session issuer into
//! the authentication service. Handlers depend on the traits, never on
//! the concrete wiring.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, SessionIssuer};
use crate::config::Config;
use crate::infra::{AgencyStore, FsMediaStore, MediaResolver};

#[cfg(test)]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of `ServiceContainer`.
pub struct Services {
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }

    /// Wire the full service graph from a database connection and config.
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> Self {
        let agencies = Arc::new(AgencyStore::new(db));
        let media = MediaResolver::new(Arc::new(FsMediaStore::new(config)), config);
        let issuer = SessionIssuer::new(config);

        Self {
            auth_service: Arc::new(Authenticator::new(agencies, media, issuer)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
