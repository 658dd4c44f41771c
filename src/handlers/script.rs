//! Script execution handler.

use crate::error::AppError;
use crate::handlers::tables::body_to_map;
use crate::response::ScriptBody;
use crate::service::ScriptRunner;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

/// POST /execute_script — body `{script}`.
pub async fn execute_script(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScriptBody>, AppError> {
    let body = body_to_map(body)?;
    let script = body
        .get("script")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("No script provided".into()))?;
    let outcome = ScriptRunner::run(&state.store, script).await?;
    Ok(Json(ScriptBody {
        success: outcome.success,
        results: outcome.rows,
    }))
}
