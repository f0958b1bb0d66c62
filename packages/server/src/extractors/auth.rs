use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::EntityTrait;

use crate::entity::{blog, user};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Authenticated user extracted from the `Authorization: bearer <token>`
/// header.
///
/// Add this as a handler parameter to require authentication. Extraction
/// verifies the token signature and confirms the referenced user still
/// exists. Ownership checks happen via [`AuthUser::require_owner`] in the
/// handler body.
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub name: Option<String>,
}

impl AuthUser {
    /// Returns `Ok(())` if the user owns the given blog, `Err(NotOwner)`
    /// otherwise. A blog without an owner is mutable by nobody.
    pub fn require_owner(&self, blog: &blog::Model) -> Result<(), AppError> {
        if blog.owner_id == Some(self.user_id) {
            Ok(())
        } else {
            Err(AppError::NotOwner)
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        // Scheme names are case-insensitive: accept "bearer" and "Bearer".
        let token = auth_header
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token)
            .ok_or(AppError::TokenInvalid)?;

        let claims = jwt::verify(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        // A signed token outlives account removal; re-check the store.
        let user = user::Entity::find_by_id(claims.uid)
            .one(&state.db)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
            name: user.name,
        })
    }
}
