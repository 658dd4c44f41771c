//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{name}: expected a boolean, got '{value}'")]
    InvalidBool { name: &'static str, value: String },
    #[error("{name}: invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("{0}")]
    Validation(String),
    #[error("Table {0} not supported for this operation")]
    UnsupportedTable(String),
    #[error("{0}")]
    NotFound(String),
    /// Caller named a table or column the catalog does not know. Worded like SQLite's own errors.
    #[error("{0}")]
    UnknownIdentifier(String),
    #[error("{}", store_message(.0))]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Settings(_) => "config_error",
            AppError::Validation(_) => "validation_error",
            AppError::UnsupportedTable(_) => "unsupported_table",
            AppError::NotFound(_) => "not_found",
            AppError::UnknownIdentifier(_) | AppError::Db(_) => "database_error",
            AppError::BadRequest(_) => "bad_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Settings(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Raw text from the engine for database errors, so callers see what SQLite said.
fn store_message(e: &sqlx::Error) -> String {
    match e {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
