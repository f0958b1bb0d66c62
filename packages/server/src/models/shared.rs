use crate::error::AppError;

/// Validate a trimmed title (1-256 Unicode characters).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 256 {
        return Err(AppError::Validation(
            "Title must be 1-256 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a required free-form string field (non-empty after trimming).
pub fn validate_required(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a likes count (must be >= 0 when present).
pub fn validate_optional_likes(likes: Option<i32>) -> Result<(), AppError> {
    if let Some(likes) = likes
        && likes < 0
    {
        return Err(AppError::Validation("Likes must be >= 0".into()));
    }
    Ok(())
}
