//! HTTP handlers for users, generic tables, scripts, and pages.

pub mod pages;
pub mod script;
pub mod tables;
pub mod users;
pub use script::*;
pub use tables::*;
pub use users::*;
