//! Agency repository - lookups by unique keys and account insertion.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::agency::{self, Entity as AgencyEntity};
use crate::domain::{Agency, NewAgency};
use crate::errors::{AppError, AppResult};

/// Data access contract for agency accounts.
///
/// Required invariant: the backing store enforces uniqueness of `email`
/// (and `agent_id`) atomically at insert time. The workflows rely on
/// this to close the race between the duplicate check and the insert.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AgencyRepository: Send + Sync {
    /// Find an account by its unique email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Agency>>;

    /// Find an account by its agent identifier
    async fn find_by_agent_id(&self, agent_id: &str) -> AppResult<Option<Agency>>;

    /// Combined login lookup. An email match wins; the agent identifier
    /// is consulted only when no email row matches, so a candidate that
    /// matches both fields on different rows resolves deterministically.
    async fn find_by_email_or_agent_id(&self, candidate: &str) -> AppResult<Option<Agency>> {
        if let Some(agency) = self.find_by_email(candidate).await? {
            return Ok(Some(agency));
        }
        self.find_by_agent_id(candidate).await
    }

    /// Insert a new account and return the persisted record with its
    /// generated identifier. Insert failures (including unique-key
    /// violations) surface as storage errors.
    async fn insert(&self, record: NewAgency) -> AppResult<Agency>;
}

/// SeaORM-backed implementation of `AgencyRepository`.
pub struct AgencyStore {
    db: DatabaseConnection,
}

impl AgencyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AgencyRepository for AgencyStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Agency>> {
        let result = AgencyEntity::find()
            .filter(agency::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Agency::from))
    }

    async fn find_by_agent_id(&self, agent_id: &str) -> AppResult<Option<Agency>> {
        let result = AgencyEntity::find()
            .filter(agency::Column::AgentId.eq(agent_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Agency::from))
    }

    async fn insert(&self, record: NewAgency) -> AppResult<Agency> {
        let now = Utc::now();
        let active_model = agency::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(record.email),
            agent_id: Set(record.agent_id),
            password_hash: Set(record.password_hash),
            name: Set(record.name),
            area: Set(record.area),
            district: Set(record.district),
            division: Set(record.division),
            country: Set(record.country),
            motive: Set(record.motive),
            user_type: Set(record.user_type.to_string()),
            title_pic: Set(record.title_pic),
            cover_pic: Set(record.cover_pic),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::storage(e.to_string()))?;

        Ok(Agency::from(model))
    }
}
