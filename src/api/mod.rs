//! API handlers for Shelfmark REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod library;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for the authenticated user's id, taken from the verified JWT's
/// subject claim.
///
/// A missing or malformed header, an invalid token, or a non-numeric subject
/// all reject with 401 before any service runs.
pub struct AuthenticatedUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        let user_id = claims
            .subject_id()
            .ok_or_else(|| AppError::Authentication("Invalid subject claim".to_string()))?;

        Ok(AuthenticatedUser(user_id))
    }
}
