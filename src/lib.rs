//! SQLite admin backend: CRUD on the fixed `user` table plus generic table browsing,
//! record insert/delete by table name, and ad-hoc script execution.

pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;

pub use error::{AppError, SettingsError};
pub use model::{Column, NewUser, Record, ScriptOutcome, User};
pub use routes::{admin_routes, app, common_routes_with_ready, page_routes};
pub use service::{RecordAccessor, SchemaInspector, ScriptRunner, UserRepository, SAMPLE_ROW_LIMIT};
pub use settings::{AdminPolicy, Settings};
pub use state::AppState;
pub use store::{Store, USER_TABLE};
