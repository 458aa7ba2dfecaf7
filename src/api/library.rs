//! Library endpoints
//!
//! All routes operate on the authenticated caller's single library; there is
//! no library id in the path.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::library::{CreateLibrary, Library, UpdateLibrary},
};

use super::AuthenticatedUser;

/// Get the caller's library
#[utoipa::path(
    get,
    path = "/library",
    tag = "library",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's library", body = Library),
        (status = 404, description = "Caller has no library")
    )
)]
pub async fn get_library(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> AppResult<Json<Library>> {
    let library = state.services.library.get_by_user_id(user_id).await?;
    Ok(Json(library))
}

/// Create the caller's library
#[utoipa::path(
    post,
    path = "/library",
    tag = "library",
    security(("bearer_auth" = [])),
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 404, description = "User not found"),
        (status = 409, description = "Caller already has a library")
    )
)]
pub async fn create_library(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Json(library): Json<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let created = state.services.library.create(user_id, &library).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update the caller's library
#[utoipa::path(
    put,
    path = "/library",
    tag = "library",
    security(("bearer_auth" = [])),
    request_body = UpdateLibrary,
    responses(
        (status = 204, description = "Library updated"),
        (status = 404, description = "Caller has no library")
    )
)]
pub async fn update_library(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Json(library): Json<UpdateLibrary>,
) -> AppResult<StatusCode> {
    state.services.library.update(user_id, &library).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the caller's library and all books in it
#[utoipa::path(
    delete,
    path = "/library",
    tag = "library",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Library deleted"),
        (status = 404, description = "Caller has no library")
    )
)]
pub async fn delete_library(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> AppResult<StatusCode> {
    state.services.library.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
