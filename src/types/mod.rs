//! Shared types for consistent request/response shapes.

mod response;
mod violation;

pub use response::{Envelope, LoginEnvelope};
pub use violation::Violation;
