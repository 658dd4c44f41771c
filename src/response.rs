//! Response bodies for the admin and user routes.

use crate::model::{Column, Record, User};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct TableDataBody {
    pub schema: Vec<Column>,
    pub data: Vec<Record>,
}

#[derive(Serialize)]
pub struct TablesBody {
    pub tables: Vec<String>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

#[derive(Serialize)]
pub struct ScriptBody {
    pub success: bool,
    pub results: Vec<Record>,
}

pub fn created(message: &'static str, id: i64) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::CREATED,
        Json(MessageBody {
            success: true,
            message,
            id: Some(id),
        }),
    )
}

pub fn done(message: &'static str, id: Option<i64>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            success: true,
            message,
            id,
        }),
    )
}
