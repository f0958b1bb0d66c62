use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{blog, user};
use crate::error::AppError;
use crate::utils::stats::{FavoriteBlog, TopAuthor};

use super::shared::{validate_optional_likes, validate_required, validate_title};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Defaults to 0 when omitted.
    pub likes: Option<i32>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i32>,
}

/// The owning user embedded in blog responses.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogOwner {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i32,
    /// `null` for blogs without a surviving owner.
    pub owner: Option<BlogOwner>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over the whole blog collection.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogStatsResponse {
    /// Sum of likes across all blogs.
    #[schema(example = 125)]
    pub total_likes: i64,
    /// The most-liked blog, or `null` for an empty collection.
    #[schema(example = json!({"title": "Hello, World", "author": "Jake Burton", "likes": 77}))]
    pub favorite: Option<FavoriteBlog>,
    /// The most prolific author, or `null` for an empty collection.
    #[schema(example = json!({"author": "Jake Burton", "count": 3}))]
    pub most_blogs: Option<TopAuthor>,
}

impl From<user::Model> for BlogOwner {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}

impl BlogResponse {
    pub fn from_model(m: blog::Model, owner: Option<BlogOwner>) -> Self {
        Self {
            id: m.id,
            title: m.title,
            author: m.author,
            url: m.url,
            likes: m.likes,
            owner,
            created_at: m.created_at,
        }
    }
}

impl From<(blog::Model, Option<user::Model>)> for BlogResponse {
    fn from((m, owner): (blog::Model, Option<user::Model>)) -> Self {
        Self::from_model(m, owner.map(BlogOwner::from))
    }
}

pub fn validate_create_blog(req: &CreateBlogRequest) -> Result<(), AppError> {
    validate_title(&req.title)?;
    validate_required(&req.author, "Author")?;
    validate_required(&req.url, "Url")?;
    validate_optional_likes(req.likes)
}

pub fn validate_update_blog(req: &UpdateBlogRequest) -> Result<(), AppError> {
    if let Some(ref title) = req.title {
        validate_title(title)?;
    }
    if let Some(ref author) = req.author {
        validate_required(author, "Author")?;
    }
    if let Some(ref url) = req.url {
        validate_required(url, "Url")?;
    }
    validate_optional_likes(req.likes)
}
