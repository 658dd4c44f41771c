//! Insert and delete addressed by table name.
//! `user` goes through [`UserRepository`]; other tables are refused unless generic insert is enabled.

use crate::error::AppError;
use crate::service::schema::SchemaInspector;
use crate::service::users::UserRepository;
use crate::service::validation::RequestValidator;
use crate::settings::AdminPolicy;
use crate::sql::{insert, QueryBuf, SqliteBindValue};
use crate::store::{rollback_with, Store, USER_TABLE};
use serde_json::{Map, Value};
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

pub struct RecordAccessor;

impl RecordAccessor {
    /// Insert one record. Returns the id of the new row.
    pub async fn insert(
        store: &Store,
        policy: AdminPolicy,
        table: &str,
        record: &Map<String, Value>,
    ) -> Result<i64, AppError> {
        if record.is_empty() {
            return Err(AppError::Validation("No data provided".into()));
        }
        if table == USER_TABLE {
            let user = RequestValidator::new_user(record)?;
            return UserRepository::create(store, &user).await;
        }
        if !policy.generic_insert {
            return Err(AppError::UnsupportedTable(table.to_string()));
        }
        let mut conn = store.connect().await?;
        let result = Self::insert_generic_on(&mut conn, table, record).await;
        store.release(conn).await;
        result
    }

    /// Delete by `id` from the body. Only `user` is supported.
    pub async fn delete(store: &Store, table: &str, body: &Map<String, Value>) -> Result<i64, AppError> {
        let id = RequestValidator::record_id(body)?;
        if table != USER_TABLE {
            return Err(AppError::UnsupportedTable(table.to_string()));
        }
        UserRepository::delete(store, id).await?;
        Ok(id)
    }

    /// Dynamic INSERT. Table and column names are always checked against the catalog here,
    /// whatever the identifier policy says for reads.
    async fn insert_generic_on(
        conn: &mut SqliteConnection,
        table: &str,
        record: &Map<String, Value>,
    ) -> Result<i64, AppError> {
        let strict = AdminPolicy::default();
        let columns = SchemaInspector::describe_table_on(conn, strict, table).await?;
        if let Some(unknown) = record.keys().find(|k| !columns.iter().any(|c| &c.name == *k)) {
            return Err(AppError::UnknownIdentifier(format!(
                "table {} has no column named {}",
                table, unknown
            )));
        }

        let q = insert(table, record);
        let mut tx = conn.begin().await?;
        let outcome = execute(&mut tx, &q).await;
        match outcome {
            Ok(id) => {
                tx.commit().await?;
                tracing::info!(table = %table, id, "inserted record");
                Ok(id)
            }
            Err(e) => Err(rollback_with(tx, e).await),
        }
    }
}

async fn execute(conn: &mut SqliteConnection, q: &QueryBuf) -> Result<i64, sqlx::Error> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(SqliteBindValue::from_json(p));
    }
    let done = query.execute(&mut *conn).await?;
    Ok(done.last_insert_rowid())
}
