//! Response body envelopes.
//!
//! Every response carries `{message, status, ...}` in the body; the
//! `status` field is the client-facing code, which may differ from the
//! transport status line.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::AgencyProfile;

/// Standard body envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope {
    #[schema(example = "Agency successfully saved")]
    pub message: String,
    #[schema(example = 201)]
    pub status: u16,
}

impl Envelope {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// Login body envelope. `agency` is the profile projection on success
/// and explicitly `null` on every failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginEnvelope {
    #[schema(example = "Login Successfully!!")]
    pub message: String,
    pub agency: Option<AgencyProfile>,
    #[schema(example = 202)]
    pub status: u16,
}

impl LoginEnvelope {
    pub fn success(agency: AgencyProfile) -> Self {
        Self {
            message: "Login Successfully!!".to_string(),
            agency: Some(agency),
            status: 202,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_message_and_status() {
        let body = serde_json::to_value(Envelope::new("Agency successfully saved", 201)).unwrap();
        assert_eq!(body["message"], "Agency successfully saved");
        assert_eq!(body["status"], 201);
    }
}
