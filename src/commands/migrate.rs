//! Migrate command - schema management from the command line.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.ensure_schema().await.map_err(migration_error)?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_last().await.map_err(migration_error)?;
            tracing::info!("Rolled back the last migration");
        }
        MigrateAction::Status => {
            for entry in db.schema_status().await.map_err(migration_error)? {
                let tag = if entry.applied { "applied" } else { "pending" };
                println!("{:<8} {}", tag, entry.name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping the schema and re-applying every migration");
            db.reset_schema().await.map_err(migration_error)?;
            tracing::info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}

fn migration_error(e: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}
