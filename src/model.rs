//! Shapes returned by the services and serialized by the handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row of the fixed `user` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Column metadata as reported by `PRAGMA table_info`, plus single-column uniqueness.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Column {
    pub cid: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    pub notnull: bool,
    pub dflt_value: Option<String>,
    /// 1-based position within the primary key, 0 when not part of it.
    pub pk: i64,
    pub unique: bool,
}

impl Column {
    pub fn is_primary_key(&self) -> bool {
        self.pk > 0
    }
}

/// A row rendered as a JSON object keyed by column name.
pub type Record = Value;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScriptOutcome {
    pub success: bool,
    pub rows: Vec<Record>,
}
