//! Migration: Create the agencies table.
//!
//! `email` and `agent_id` carry UNIQUE indexes; the registration
//! workflow depends on the database rejecting a concurrent duplicate.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agencies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Agencies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Agencies::Email).string().not_null())
                    .col(ColumnDef::new(Agencies::AgentId).string().not_null())
                    .col(ColumnDef::new(Agencies::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Agencies::Name).string().not_null())
                    .col(ColumnDef::new(Agencies::Area).string().not_null())
                    .col(ColumnDef::new(Agencies::District).string().not_null())
                    .col(ColumnDef::new(Agencies::Division).string().not_null())
                    .col(ColumnDef::new(Agencies::Country).string().not_null())
                    .col(ColumnDef::new(Agencies::Motive).string().not_null())
                    .col(ColumnDef::new(Agencies::UserType).string().not_null())
                    .col(ColumnDef::new(Agencies::TitlePic).string().not_null())
                    .col(ColumnDef::new(Agencies::CoverPic).string().not_null())
                    .col(
                        ColumnDef::new(Agencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Agencies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agencies_email")
                    .table(Agencies::Table)
                    .col(Agencies::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agencies_agent_id")
                    .table(Agencies::Table)
                    .col(Agencies::AgentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agencies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Agencies {
    Table,
    Id,
    Email,
    AgentId,
    PasswordHash,
    Name,
    Area,
    District,
    Division,
    Country,
    Motive,
    UserType,
    TitlePic,
    CoverPic,
    CreatedAt,
    UpdatedAt,
}
