use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Argon2 digest of the password. Never leaves the process in any
    /// serialized form.
    #[serde(skip_serializing)]
    pub password_hash: String,

    #[sea_orm(has_many)]
    pub blogs: HasMany<super::blog::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
