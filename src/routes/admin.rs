//! Admin and user routes.
//! Table names come from the path as given; handlers pass them to the services unchanged.

use crate::handlers::{
    add_record, create_user, delete_record, execute_script, list_tables, list_users, table_data,
};
use crate::handlers::pages::{index, script_executor, table_manager};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/tables", get(list_tables))
        .route("/table_data/:table_name", get(table_data))
        .route("/add_record/:table_name", post(add_record))
        .route("/delete_record/:table_name", delete(delete_record))
        .route("/execute_script", post(execute_script))
        .with_state(state)
}

/// HTML pages: GET /, /table_manager, /script_executor.
pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/table_manager", get(table_manager))
        .route("/script_executor", get(script_executor))
        .with_state(state)
}
