//! Generic table handlers: list, inspect, add and delete records by table name.

use crate::error::AppError;
use crate::response::{created, done, TableDataBody, TablesBody};
use crate::service::{RecordAccessor, SchemaInspector};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{Map, Value};

pub(crate) fn body_to_map(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    let Json(value) = body?;
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list_tables(State(state): State<AppState>) -> Result<Json<TablesBody>, AppError> {
    let tables = SchemaInspector::list_tables(&state.store).await?;
    Ok(Json(TablesBody { tables }))
}

pub async fn table_data(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> Result<Json<TableDataBody>, AppError> {
    let (schema, data) = SchemaInspector::table_data(&state.store, state.policy, &table_name).await?;
    Ok(Json(TableDataBody { schema, data }))
}

pub async fn add_record(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let record = body_to_map(body)?;
    let id = RecordAccessor::insert(&state.store, state.policy, &table_name, &record).await?;
    Ok(created("Record added successfully!", id))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let id = RecordAccessor::delete(&state.store, &table_name, &body).await?;
    Ok(done("Record deleted successfully!", Some(id)))
}
