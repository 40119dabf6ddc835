//! Agency account handlers - registration and login.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::Json,
    routing::post,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{LoginAgency, RegisterAgency};
use crate::errors::{AppError, AppResult, LoginError};
use crate::types::{Envelope, LoginEnvelope};

/// Create agency account routes
pub fn agency_routes() -> Router<AppState> {
    Router::new()
        .route("/registration", post(register))
        .route("/login", post(login))
}

/// Register a new agency account
#[utoipa::path(
    post,
    path = "/agency/registration",
    tag = "Agency",
    request_body = RegisterAgency,
    responses(
        (status = 201, description = "Agency registered successfully", body = Envelope),
        (status = 400, description = "Validation error"),
        (status = 406, description = "Confirm password mismatch or media upload failure"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterAgency>,
) -> AppResult<(StatusCode, Json<Envelope>)> {
    state.auth_service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Agency successfully saved", 201)),
    ))
}

/// Login with email or agent identifier
///
/// The payload extraction result is taken as a `Result` so validation
/// rejections also pass through the login error shape, which carries an
/// explicit `agency: null`.
#[utoipa::path(
    post,
    path = "/agency/login",
    tag = "Agency",
    request_body = LoginAgency,
    responses(
        (status = 202, description = "Login successful", body = LoginEnvelope),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Password mismatch"),
        (status = 404, description = "Agency not found")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<LoginAgency>, AppError>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<LoginEnvelope>), LoginError> {
    let ValidatedJson(payload) = payload?;

    let outcome = state.auth_service.login(payload).await?;

    Ok((
        StatusCode::ACCEPTED,
        [(header::SET_COOKIE, outcome.session.cookie)],
        Json(LoginEnvelope::success(outcome.agency)),
    ))
}
