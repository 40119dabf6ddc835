//! Agency domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use validator::Validate;

use crate::config::{USER_TYPE_ADMIN, USER_TYPE_AGENCY};

/// Account type tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Agency,
    Admin,
}

impl UserType {
    /// Check if this type has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserType::Admin)
    }
}

impl From<&str> for UserType {
    fn from(s: &str) -> Self {
        match s {
            USER_TYPE_ADMIN => UserType::Admin,
            _ => UserType::Agency,
        }
    }
}

impl From<UserType> for String {
    fn from(user_type: UserType) -> Self {
        user_type.to_string()
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Admin => write!(f, "{}", USER_TYPE_ADMIN),
            UserType::Agency => write!(f, "{}", USER_TYPE_AGENCY),
        }
    }
}

/// Image asset kind resolved during registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Title,
    Cover,
}

impl ImageKind {
    /// Lowercase tag used in derived file names and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Title => "title",
            ImageKind::Cover => "cover",
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageKind::Title => write!(f, "Title"),
            ImageKind::Cover => write!(f, "Cover"),
        }
    }
}

/// Agency domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: Uuid,
    pub email: String,
    /// Alternate unique lookup key, usable in place of email at login
    pub agent_id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub area: String,
    pub district: String,
    pub division: String,
    pub country: String,
    pub motive: String,
    pub user_type: UserType,
    /// Resolved asset URL, non-empty after registration
    pub title_pic: String,
    /// Resolved asset URL, non-empty after registration
    pub cover_pic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Assembled account record handed to the repository for insertion.
/// Carries the password hash, never the plaintext.
#[derive(Debug, Clone)]
pub struct NewAgency {
    pub email: String,
    pub agent_id: String,
    pub password_hash: String,
    pub name: String,
    pub area: String,
    pub district: String,
    pub division: String,
    pub country: String,
    pub motive: String,
    pub user_type: UserType,
    pub title_pic: String,
    pub cover_pic: String,
}

/// Agency registration request.
///
/// The schema recognizes exactly these fields; unknown keys in the raw
/// payload are ignored during binding. `confirm_password` is compared
/// against `password` by the registration workflow and never persisted.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAgency {
    /// Agency email address, the unique account key
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "agency@example.com")]
    pub email: String,
    /// Alternate agent identifier
    #[validate(length(min = 1, message = "Agent ID is required"))]
    #[serde(rename = "agentID")]
    #[schema(example = "AG-1024")]
    pub agent_id: String,
    /// Account password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Must equal `password`
    #[validate(length(min = 1, message = "Confirm Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub confirm_password: String,
    /// Agency display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Skyline Travels")]
    pub name: String,
    #[validate(length(min = 1, message = "Area is required"))]
    pub area: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    #[validate(length(min = 1, message = "Division is required"))]
    pub division: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    /// Agency mission statement
    #[validate(length(min = 1, message = "Motive is required"))]
    pub motive: String,
    /// Account type tag, defaults to `agency`
    #[serde(default)]
    pub user_type: UserType,
    /// Optional inline title image, base64 encoded
    #[serde(default)]
    pub title_pic: Option<String>,
    /// Optional inline cover image, base64 encoded
    #[serde(default)]
    pub cover_pic: Option<String>,
}

/// Agency login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginAgency {
    /// Email address or agent identifier
    #[validate(length(min = 1, message = "Email or Agent ID is required"))]
    #[schema(example = "agency@example.com")]
    pub email_or_agent_id: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Non-sensitive profile projection returned on login.
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgencyProfile {
    #[schema(example = "Skyline Travels")]
    pub name: String,
    pub area: String,
    pub district: String,
    pub division: String,
    pub country: String,
    pub title_pic: String,
    pub cover_pic: String,
    pub motive: String,
    #[schema(example = "agency@example.com")]
    pub email: String,
    #[serde(rename = "agentID")]
    #[schema(example = "AG-1024")]
    pub agent_id: String,
}

impl From<Agency> for AgencyProfile {
    fn from(agency: Agency) -> Self {
        Self {
            name: agency.name,
            area: agency.area,
            district: agency.district,
            division: agency.division,
            country: agency.country,
            title_pic: agency.title_pic,
            cover_pic: agency.cover_pic,
            motive: agency.motive,
            email: agency.email,
            agent_id: agency.agent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_agency() -> Agency {
        Agency {
            id: Uuid::new_v4(),
            email: "agency@example.com".to_string(),
            agent_id: "AG-1024".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            name: "Skyline Travels".to_string(),
            area: "Banani".to_string(),
            district: "Dhaka".to_string(),
            division: "Dhaka".to_string(),
            country: "Bangladesh".to_string(),
            motive: "Travel for everyone".to_string(),
            user_type: UserType::Agency,
            title_pic: "/public/defaults/title-skyline-travels.png".to_string(),
            cover_pic: "/public/defaults/cover-skyline-travels.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn profile_excludes_password_hash() {
        let profile = AgencyProfile::from(sample_agency());
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["agentID"], "AG-1024");
        assert_eq!(json["email"], "agency@example.com");
    }

    #[test]
    fn register_request_binds_by_field_name_and_ignores_unknown_keys() {
        let raw = serde_json::json!({
            "email": "agency@example.com",
            "agentID": "AG-1024",
            "password": "SecurePass123!",
            "confirmPassword": "SecurePass123!",
            "name": "Skyline Travels",
            "area": "Banani",
            "district": "Dhaka",
            "division": "Dhaka",
            "country": "Bangladesh",
            "motive": "Travel for everyone",
            "somethingUnknown": true,
        });

        let request: RegisterAgency = serde_json::from_value(raw).unwrap();
        assert_eq!(request.agent_id, "AG-1024");
        assert_eq!(request.user_type, UserType::Agency);
        assert!(request.title_pic.is_none());
        assert!(request.cover_pic.is_none());
    }

    #[test]
    fn user_type_round_trips_through_strings() {
        assert_eq!(UserType::from("agency"), UserType::Agency);
        assert_eq!(UserType::from("admin"), UserType::Admin);
        assert_eq!(UserType::from("anything-else"), UserType::Agency);
        assert_eq!(UserType::Admin.to_string(), "admin");
    }

    #[test]
    fn image_kind_tags() {
        assert_eq!(ImageKind::Title.as_str(), "title");
        assert_eq!(ImageKind::Cover.as_str(), "cover");
        assert_eq!(ImageKind::Cover.to_string(), "Cover");
    }
}
