//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::agency_handler;
use crate::domain::{AgencyProfile, LoginAgency, RegisterAgency, UserType};
use crate::types::{Envelope, LoginEnvelope, Violation};

/// OpenAPI documentation for the Agency API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agency API",
        version = "0.1.0",
        description = "Identity service for agency accounts: registration and login"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        agency_handler::register,
        agency_handler::login,
    ),
    components(
        schemas(
            UserType,
            RegisterAgency,
            LoginAgency,
            AgencyProfile,
            Envelope,
            LoginEnvelope,
            Violation,
        )
    ),
    tags(
        (name = "Agency", description = "Agency registration and login")
    )
)]
pub struct ApiDoc;
