//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and repositories
//! - Media asset storage

pub mod db;
pub mod media;
pub mod repositories;

pub use db::{Database, Migrator};
pub use media::{FsMediaStore, MediaResolver, MediaStore};
pub use repositories::{AgencyRepository, AgencyStore};

#[cfg(test)]
pub use media::MockMediaStore;
#[cfg(test)]
pub use repositories::MockAgencyRepository;
