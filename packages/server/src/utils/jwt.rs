use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Username
    pub uid: i32,    // User ID
    pub iat: usize,  // Issued-at timestamp
}

/// Sign a new bearer token for a user.
///
/// No `exp` claim is set: tokens stay valid until the signing secret
/// rotates.
pub fn sign(user_id: i32, username: &str, secret: &str) -> Result<String> {
    let claims = Claims {
        sub: username.to_owned(),
        uid: user_id,
        iat: Utc::now().timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a bearer token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    // Tokens carry no expiry claim, so expiry validation is switched off
    // explicitly rather than left to the default validator.
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
