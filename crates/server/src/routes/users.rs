use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::user::User;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateUserOutput {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserInput {
    pub display_name: String,
}

/// Unwrap a JSON body extraction, turning axum's rejection into our 400.
fn bind<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::invalid_request(rejection.body_text())),
    }
}

#[utoipa::path(
    get, path = "/api/v1/users", tag = "users",
    responses(
        (status = 200, description = "All users keyed by identifier")
    )
)]
pub async fn list_users(State(state): State<ServerState>) -> Json<HashMap<String, User>> {
    Json(state.users.list_users())
}

#[utoipa::path(
    post, path = "/api/v1/users", tag = "users",
    request_body = crate::openapi::CreateUserInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreateUserOutputDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    payload: Result<Json<CreateUserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserOutput>), ApiError> {
    let input = bind(payload)?;
    if input.display_name.trim().is_empty() {
        return Err(ApiError::invalid_request("display_name is required"));
    }
    if input.email.trim().is_empty() {
        return Err(ApiError::invalid_request("email is required"));
    }

    let user = User {
        created_at: Utc::now(),
        display_name: input.display_name,
        email: input.email,
    };
    let user_id = state.users.create_user(user)?;
    info!(%user_id, "user created");
    Ok((StatusCode::CREATED, Json(CreateUserOutput { user_id })))
}

#[utoipa::path(
    get, path = "/api/v1/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = crate::openapi::UserDoc),
        (status = 404, description = "Unknown identifier", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get_user(&id)?;
    Ok(Json(user))
}

/// PATCH only ever touches `display_name`; `email` and `created_at` are
/// carried over from the stored record.
#[utoipa::path(
    patch, path = "/api/v1/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    request_body = crate::openapi::UpdateUserInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid request", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Unknown identifier", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let input = bind(payload)?;
    if input.display_name.trim().is_empty() {
        return Err(ApiError::invalid_request("display_name is required"));
    }

    let mut user = state.users.get_user(&id)?;
    user.display_name = input.display_name;
    state.users.update_user(&id, user)?;
    info!(user_id = %id, "user updated");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/v1/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown identifier", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.users.delete_user(&id)?;
    info!(user_id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
