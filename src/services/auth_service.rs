//! Authentication service - agency registration and login workflows.
//!
//! Both workflows are strictly sequential and short-circuit on the
//! first failure; no step runs after a guard has produced a failure
//! response. Outcome-to-status mapping lives in the error type.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Agency, AgencyProfile, ImageKind, LoginAgency, NewAgency, Password, RegisterAgency};
use crate::errors::{AppError, AppResult};
use crate::infra::{AgencyRepository, MediaResolver};
use crate::services::session::{SessionIssuer, SessionToken};

/// Successful login: profile projection plus the issued session.
#[derive(Debug)]
pub struct LoginOutcome {
    pub agency: AgencyProfile,
    pub session: SessionToken,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new agency account
    async fn register(&self, request: RegisterAgency) -> AppResult<Agency>;

    /// Authenticate by email or agent id and issue a session
    async fn login(&self, request: LoginAgency) -> AppResult<LoginOutcome>;
}

/// Concrete implementation of `AuthService`.
pub struct Authenticator {
    agencies: Arc<dyn AgencyRepository>,
    media: MediaResolver,
    issuer: SessionIssuer,
}

impl Authenticator {
    pub fn new(
        agencies: Arc<dyn AgencyRepository>,
        media: MediaResolver,
        issuer: SessionIssuer,
    ) -> Self {
        Self {
            agencies,
            media,
            issuer,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, request: RegisterAgency) -> AppResult<Agency> {
        // Schema validation has already run in the extractor.
        if request.password != request.confirm_password {
            return Err(AppError::ConfirmPasswordMismatch);
        }

        if self.agencies.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyRegistered);
        }

        let password_hash = Password::hash(&request.password)?.into_string();

        // One resolution per image kind; a failed upload aborts before
        // anything is persisted.
        let title_pic = self
            .media
            .resolve(ImageKind::Title, request.title_pic.as_deref(), &request.name)
            .await?;
        let cover_pic = self
            .media
            .resolve(ImageKind::Cover, request.cover_pic.as_deref(), &request.name)
            .await?;

        let agency = self
            .agencies
            .insert(NewAgency {
                email: request.email,
                agent_id: request.agent_id,
                password_hash,
                name: request.name,
                area: request.area,
                district: request.district,
                division: request.division,
                country: request.country,
                motive: request.motive,
                user_type: request.user_type,
                title_pic,
                cover_pic,
            })
            .await?;

        tracing::info!(agency_id = %agency.id, "Agency registered");
        Ok(agency)
    }

    async fn login(&self, request: LoginAgency) -> AppResult<LoginOutcome> {
        let agency = self
            .agencies
            .find_by_email_or_agent_id(&request.email_or_agent_id)
            .await?
            .ok_or(AppError::AgencyNotFound)?;

        let stored = Password::from_hash(agency.password_hash.clone());
        if !stored.verify(&request.password) {
            return Err(AppError::PasswordMismatch);
        }

        let session = self.issuer.issue(&agency.agent_id, &agency.email)?;

        Ok(LoginOutcome {
            agency: AgencyProfile::from(agency),
            session,
        })
    }
}
