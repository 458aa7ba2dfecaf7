//! Library model and related types
//!
//! Each user owns at most one library, enforced by a unique constraint on
//! `libraries.user_id`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Library row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Library {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Create library request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLibrary {
    #[validate(length(min = 1, message = "Library name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
}

/// Update library request; name always overwrites, description only if supplied
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLibrary {
    #[validate(length(min = 1, message = "Library name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
}
