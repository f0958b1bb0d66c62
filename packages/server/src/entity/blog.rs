use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i32,

    /// NULL for records that predate ownership tracking or whose owning
    /// account was removed. Deleting a user does not cascade to blogs.
    pub owner_id: Option<i32>,
    #[sea_orm(belongs_to, from = "owner_id", to = "id")]
    pub owner: Option<super::user::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
