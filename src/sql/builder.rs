//! Builds catalog, sample and INSERT statements for tables named at runtime.

use serde_json::{Map, Value};

/// Quote identifier for SQLite (embedded `"` doubled).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// How a caller-supplied table name is written into statement text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ident {
    /// Double-quoted. Only used after the name was checked against the catalog.
    Quoted,
    /// Spliced in as given. Reproduces the permissive behavior; open to injection.
    Raw,
}

impl Ident {
    fn render(self, name: &str) -> String {
        match self {
            Ident::Quoted => quoted(name),
            Ident::Raw => name.to_string(),
        }
    }
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) {
        self.params.push(v);
    }
}

pub const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type='table'";

pub fn table_info(table: &str, ident: Ident) -> String {
    format!("PRAGMA table_info({})", ident.render(table))
}

pub fn index_list(table: &str) -> String {
    format!("PRAGMA index_list({})", quoted(table))
}

pub fn index_info(index: &str) -> String {
    format!("PRAGMA index_info({})", quoted(index))
}

/// `SELECT *` with a row cap and no ORDER BY.
pub fn select_sample(table: &str, limit: u32, ident: Ident) -> String {
    format!("SELECT * FROM {} LIMIT {}", ident.render(table), limit)
}

/// INSERT with one `?` per record key, values as parameters in key order. Names must already be whitelisted.
pub fn insert(table: &str, record: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(record.len());
    for (k, v) in record {
        cols.push(quoted(k));
        q.push_param(v.clone());
    }
    let placeholders = vec!["?"; cols.len()].join(", ");
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table),
        cols.join(", "),
        placeholders
    );
    q
}
