//! SQL text for runtime-named tables, parameter binding, and row decoding.

mod builder;
pub mod params;
pub mod row;
pub use builder::*;
pub use params::*;
pub use row::row_to_json;
