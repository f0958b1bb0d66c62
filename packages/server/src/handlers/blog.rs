use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{blog, user};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::blog::*;
use crate::state::AppState;
use crate::utils::stats::{self, BlogSnapshot};

#[utoipa::path(
    get,
    path = "/",
    tag = "Blogs",
    operation_id = "listBlogs",
    summary = "List all blogs",
    description = "Returns every blog with its owner populated. No authentication required.",
    responses(
        (status = 200, description = "All blogs", body = Vec<BlogResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let rows = blog::Entity::find()
        .find_also_related(user::Entity)
        .order_by_asc(blog::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(rows.into_iter().map(BlogResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Blogs",
    operation_id = "blogStats",
    summary = "Aggregate statistics over all blogs",
    description = "Total likes, the most-liked blog, and the most prolific author. No authentication required.",
    responses(
        (status = 200, description = "Collection statistics", body = BlogStatsResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn blog_stats(State(state): State<AppState>) -> Result<Json<BlogStatsResponse>, AppError> {
    let blogs = blog::Entity::find()
        .order_by_asc(blog::Column::Id)
        .all(&state.db)
        .await?;

    let snapshot: Vec<BlogSnapshot> = blogs
        .iter()
        .map(|b| BlogSnapshot {
            title: b.title.clone(),
            author: b.author.clone(),
            likes: b.likes,
        })
        .collect();

    Ok(Json(BlogStatsResponse {
        total_likes: stats::total_likes(&snapshot),
        favorite: stats::favorite_blog(&snapshot),
        most_blogs: stats::most_blogs(&snapshot),
    }))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Blogs",
    operation_id = "getBlog",
    summary = "Get a blog by ID",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog details", body = BlogResponse),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BlogResponse>, AppError> {
    let row = blog::Entity::find_by_id(id)
        .find_also_related(user::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;

    Ok(Json(row.into()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Blogs",
    operation_id = "createBlog",
    summary = "Create a new blog",
    description = "Creates a blog owned by the caller. Likes default to 0 when omitted.",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID, USER_NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(title = %payload.title))]
pub async fn create_blog(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_blog(&payload)?;

    let new_blog = blog::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        author: Set(payload.author.trim().to_string()),
        url: Set(payload.url.trim().to_string()),
        likes: Set(payload.likes.unwrap_or(0)),
        owner_id: Set(Some(auth_user.user_id)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_blog.insert(&state.db).await?;

    let owner = BlogOwner {
        id: auth_user.user_id,
        username: auth_user.username,
        name: auth_user.name,
    };

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse::from_model(model, Some(owner))),
    ))
}

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Blogs",
    operation_id = "updateBlog",
    summary = "Update an existing blog",
    description = "Partially updates a blog using PATCH semantics — only provided fields are modified. Deliberately open to any caller, authenticated or not; only deletion is owner-gated. An empty payload returns the current resource unchanged.",
    params(("id" = i32, Path, description = "Blog ID")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = BlogResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    validate_update_blog(&payload)?;

    if payload == UpdateBlogRequest::default() {
        let existing = blog::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;
        return Ok(Json(existing.into()));
    }

    let txn = state.db.begin().await?;

    let existing = find_blog(&txn, id).await?;
    let mut active: blog::ActiveModel = existing.into();

    if let Some(ref title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(ref author) = payload.author {
        active.author = Set(author.trim().to_string());
    }
    if let Some(ref url) = payload.url {
        active.url = Set(url.trim().to_string());
    }
    if let Some(likes) = payload.likes {
        active.likes = Set(likes);
    }

    let model = active.update(&txn).await?;
    txn.commit().await?;

    let owner = match model.owner_id {
        Some(owner_id) => user::Entity::find_by_id(owner_id)
            .one(&state.db)
            .await?
            .map(BlogOwner::from),
        None => None,
    };

    Ok(Json(BlogResponse::from_model(model, owner)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Blogs",
    operation_id = "deleteBlog",
    summary = "Delete a blog by ID",
    description = "Permanently deletes a blog. Only the owner may delete it.",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID, USER_NOT_FOUND)", body = ErrorBody),
        (status = 403, description = "Caller does not own the blog (NOT_OWNER)", body = ErrorBody),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id, user_id = auth_user.user_id))]
pub async fn delete_blog(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let blog = find_blog(&state.db, id).await?;
    auth_user.require_owner(&blog)?;

    blog::Entity::delete_by_id(id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn find_blog<C: ConnectionTrait>(db: &C, id: i32) -> Result<blog::Model, AppError> {
    blog::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))
}
