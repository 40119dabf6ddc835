//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod agency;
pub mod password;

pub use agency::{
    Agency, AgencyProfile, ImageKind, LoginAgency, NewAgency, RegisterAgency, UserType,
};
pub use password::Password;
