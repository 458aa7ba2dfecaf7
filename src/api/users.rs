//! User account endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::user::{UpdateUser, UserRead},
};

use super::AuthenticatedUser;

/// Update the current user's account
#[utoipa::path(
    put,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserRead),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn update_me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Json(update): Json<UpdateUser>,
) -> AppResult<Json<UserRead>> {
    let user = state.services.users.update(user_id, &update).await?;
    Ok(Json(user.into()))
}

/// Delete the current user's account, including their library and books
#[utoipa::path(
    delete,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> AppResult<StatusCode> {
    state.services.users.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
