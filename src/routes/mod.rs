//! Router builders, merged by the binary (or by tests) into one app.

mod admin;
mod common;
pub use admin::{admin_routes, page_routes};
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Every route this crate serves, with the request body cap applied.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(page_routes(state.clone()))
        .merge(admin_routes(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
}
