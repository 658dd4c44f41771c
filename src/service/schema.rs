//! Catalog reads: table names, column metadata, bounded row samples.

use crate::error::AppError;
use crate::model::{Column, Record};
use crate::settings::AdminPolicy;
use crate::sql::{index_info, index_list, row_to_json, select_sample, table_info, Ident, LIST_TABLES};
use crate::store::Store;
use sqlx::sqlite::SqliteConnection;
use sqlx::Row;
use std::collections::HashSet;

/// Upper bound on rows returned by [`SchemaInspector::sample_rows`].
pub const SAMPLE_ROW_LIMIT: u32 = 100;

pub struct SchemaInspector;

impl SchemaInspector {
    /// All table names in catalog order.
    pub async fn list_tables(store: &Store) -> Result<Vec<String>, AppError> {
        let mut conn = store.connect().await?;
        let result = Self::list_tables_on(&mut conn).await;
        store.release(conn).await;
        result
    }

    /// Columns of `table` in declaration order.
    pub async fn describe_table(
        store: &Store,
        policy: AdminPolicy,
        table: &str,
    ) -> Result<Vec<Column>, AppError> {
        let mut conn = store.connect().await?;
        let result = Self::describe_table_on(&mut conn, policy, table).await;
        store.release(conn).await;
        result
    }

    /// Up to `limit` rows of `table` (capped at [`SAMPLE_ROW_LIMIT`]), in whatever order SQLite returns them.
    pub async fn sample_rows(
        store: &Store,
        policy: AdminPolicy,
        table: &str,
        limit: u32,
    ) -> Result<Vec<Record>, AppError> {
        let mut conn = store.connect().await?;
        let result = Self::sample_rows_on(&mut conn, policy, table, limit).await;
        store.release(conn).await;
        result
    }

    /// Schema and sample for one table over a single connection.
    pub async fn table_data(
        store: &Store,
        policy: AdminPolicy,
        table: &str,
    ) -> Result<(Vec<Column>, Vec<Record>), AppError> {
        let mut conn = store.connect().await?;
        let result = async {
            let schema = Self::describe_table_on(&mut conn, policy, table).await?;
            let data = Self::sample_rows_on(&mut conn, policy, table, SAMPLE_ROW_LIMIT).await?;
            Ok::<_, AppError>((schema, data))
        }
        .await;
        store.release(conn).await;
        result
    }

    pub(crate) async fn list_tables_on(conn: &mut SqliteConnection) -> Result<Vec<String>, AppError> {
        tracing::debug!(sql = %LIST_TABLES, "query");
        let rows = sqlx::query(LIST_TABLES).fetch_all(&mut *conn).await?;
        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            names.push(row.try_get::<String, _>(0)?);
        }
        Ok(names)
    }

    /// Fails with SQLite's wording when `table` is not in the catalog.
    pub(crate) async fn require_table(conn: &mut SqliteConnection, table: &str) -> Result<(), AppError> {
        let tables = Self::list_tables_on(conn).await?;
        if tables.iter().any(|t| t == table) {
            Ok(())
        } else {
            Err(AppError::UnknownIdentifier(format!("no such table: {}", table)))
        }
    }

    pub(crate) async fn describe_table_on(
        conn: &mut SqliteConnection,
        policy: AdminPolicy,
        table: &str,
    ) -> Result<Vec<Column>, AppError> {
        let ident = if policy.raw_identifiers {
            Ident::Raw
        } else {
            Self::require_table(conn, table).await?;
            Ident::Quoted
        };

        let sql = table_info(table, ident);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;

        // Unknown table (possible in raw mode): nothing to look up.
        let unique = if rows.is_empty() {
            HashSet::new()
        } else {
            Self::unique_columns(conn, table).await?
        };

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("name")?;
            columns.push(Column {
                cid: row.try_get("cid")?,
                unique: unique.contains(&name),
                declared_type: row.try_get("type")?,
                notnull: row.try_get::<i64, _>("notnull")? != 0,
                dflt_value: row.try_get("dflt_value")?,
                pk: row.try_get("pk")?,
                name,
            });
        }
        Ok(columns)
    }

    /// Columns covered on their own by a UNIQUE index (constraint or explicit index).
    async fn unique_columns(conn: &mut SqliteConnection, table: &str) -> Result<HashSet<String>, AppError> {
        let sql = index_list(table);
        tracing::debug!(sql = %sql, "query");
        let indexes = sqlx::query(&sql).fetch_all(&mut *conn).await?;

        let mut out = HashSet::new();
        for idx in indexes {
            if idx.try_get::<i64, _>("unique")? == 0 {
                continue;
            }
            let index_name: String = idx.try_get("name")?;
            let sql = index_info(&index_name);
            tracing::debug!(sql = %sql, "query");
            let cols = sqlx::query(&sql).fetch_all(&mut *conn).await?;
            if let [only] = cols.as_slice() {
                if let Some(name) = only.try_get::<Option<String>, _>("name")? {
                    out.insert(name);
                }
            }
        }
        Ok(out)
    }

    pub(crate) async fn sample_rows_on(
        conn: &mut SqliteConnection,
        policy: AdminPolicy,
        table: &str,
        limit: u32,
    ) -> Result<Vec<Record>, AppError> {
        let ident = if policy.raw_identifiers {
            Ident::Raw
        } else {
            Self::require_table(conn, table).await?;
            Ident::Quoted
        };
        let sql = select_sample(table, limit.min(SAMPLE_ROW_LIMIT), ident);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}
