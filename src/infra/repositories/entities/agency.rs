//! SeaORM entity for the `agencies` table.
//!
//! The UNIQUE constraints on `email` and `agent_id` are what make the
//! check-then-insert registration sequence safe under concurrency: the
//! database rejects the losing insert.

use sea_orm::entity::prelude::*;

use crate::domain::{Agency, UserType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "agencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub agent_id: String,
    pub password_hash: String,
    pub name: String,
    pub area: String,
    pub district: String,
    pub division: String,
    pub country: String,
    pub motive: String,
    pub user_type: String,
    pub title_pic: String,
    pub cover_pic: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Agency {
    fn from(model: Model) -> Self {
        Agency {
            id: model.id,
            email: model.email,
            agent_id: model.agent_id,
            password_hash: model.password_hash,
            name: model.name,
            area: model.area,
            district: model.district,
            division: model.division,
            country: model.country,
            motive: model.motive,
            user_type: UserType::from(model.user_type.as_str()),
            title_pic: model.title_pic,
            cover_pic: model.cover_pic,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
