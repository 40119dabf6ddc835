//! Database connectivity and schema management.
//!
//! `connect` only opens the pool; serving and migration commands decide
//! separately whether to touch the schema, so `migrate down` never
//! races an implicit `up` from the same process.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Applied state of a single schema migration.
pub struct MigrationStatus {
    pub name: String,
    pub applied: bool,
}

/// Owns the connection pool and the schema lifecycle around it.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool against the configured database.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Hand out a pool handle for services and request state.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply any migrations not yet recorded in the database.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Undo the most recently applied migration.
    pub async fn rollback_last(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop everything and re-apply the full migration set.
    pub async fn reset_schema(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Report each known migration together with whether the database
    /// has recorded it as applied.
    pub async fn schema_status(&self) -> Result<Vec<MigrationStatus>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|migration| {
                let name = migration.name().to_string();
                let applied = applied.contains(&name);
                MigrationStatus { name, applied }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrator_registers_the_agencies_migration() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert!(!names.is_empty());
        assert!(names.iter().any(|n| n.ends_with("create_agencies_table")));
    }
}
