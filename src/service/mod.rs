//! Core operations over the store: catalog reads, record writes, script execution.

mod records;
pub mod schema;
mod script;
mod users;
mod validation;
pub use records::RecordAccessor;
pub use schema::{SchemaInspector, SAMPLE_ROW_LIMIT};
pub use script::ScriptRunner;
pub use users::UserRepository;
pub use validation::RequestValidator;
