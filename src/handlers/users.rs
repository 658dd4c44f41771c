//! Fixed `user` table handlers.

use crate::error::AppError;
use crate::handlers::tables::body_to_map;
use crate::response::{created, UsersBody};
use crate::service::{RequestValidator, UserRepository};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let user = RequestValidator::new_user(&body)?;
    let id = UserRepository::create(&state.store, &user).await?;
    Ok(created("User created successfully!", id))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersBody>, AppError> {
    let users = UserRepository::list(&state.store).await?;
    Ok(Json(UsersBody { users }))
}
