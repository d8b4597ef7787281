//! User management endpoints
//!
//! The five operations: list, get by id, create, update, delete. Update
//! and delete take the target id in the JSON body, matching the original
//! surface of this API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request to create a user. Fields default so that missing ones reach
/// the validation step and come back as field violations, not a parse
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub active: Option<bool>,
}

/// Request to update a user; the id rides in the body
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    pub id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
    pub active: Option<bool>,
}

/// Request to delete a user
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteUserApiRequest {
    pub id: Option<String>,
}

/// User representation returned to clients; no password material
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            roles: user.roles().to_vec(),
            active: user.is_active(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

/// Confirmation message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Update response carrying the updated record
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

/// GET /user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    // An empty collection is reported as not-found, not an empty array.
    if users.is_empty() {
        return Err(ApiError::not_found("No User found"));
    }

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = state.user_service.get(&id).await.map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    debug!(username = %request.username, "Creating user");

    let service_request = CreateUserRequest {
        username: request.username,
        password: request.password,
        roles: request.roles,
        active: request.active,
    };

    let user = state
        .user_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("User {} created successfully", user.username()),
        }),
    ))
}

/// PATCH /user
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let Some(id) = request.id else {
        return Err(ApiError::bad_request("Id is required"));
    };

    debug!(id = %id, "Updating user");

    let service_request = UpdateUserRequest {
        username: request.username,
        password: request.password,
        roles: request.roles,
        active: request.active,
    };

    let user = state
        .user_service
        .update(&id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UpdateUserResponse {
        message: format!("{}'s info successfully updated", user.username()),
        user: UserResponse::from(&user),
    }))
}

/// DELETE /user
pub async fn delete_user(
    State(state): State<AppState>,
    Json(request): Json<DeleteUserApiRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(id) = request.id else {
        return Err(ApiError::bad_request("ID you provided is not valid"));
    };

    debug!(id = %id, "Deleting user");

    let user = state
        .user_service
        .delete(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(MessageResponse {
        message: format!("{}'s info successfully deleted", user.username()),
    }))
}
