//! Application services layer - use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
pub mod container;
mod session;

pub use auth_service::{AuthService, Authenticator, LoginOutcome};
pub use container::{ServiceContainer, Services};
pub use session::{Claims, SessionIssuer, SessionToken};

#[cfg(test)]
pub use container::MockServiceContainer;
