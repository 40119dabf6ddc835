//! Field-level validation violations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single field-level validation failure.
///
/// `rule` is the constraint that failed (`email`, `length`, ...);
/// `message` is the client-facing description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Field the violation applies to
    #[schema(example = "email")]
    pub field: String,
    /// Constraint rule that failed
    #[schema(example = "email")]
    pub rule: String,
    /// Client-facing message
    #[schema(example = "Invalid email format")]
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}
