//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod agency_repository;
pub(crate) mod entities;

pub use agency_repository::{AgencyRepository, AgencyStore};

// Export mock for unit tests
#[cfg(test)]
pub use agency_repository::MockAgencyRepository;
