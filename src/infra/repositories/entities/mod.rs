//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod agency;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use agency::{ActiveModel as AgencyActiveModel, Entity as AgencyEntity, Model as AgencyModel};
