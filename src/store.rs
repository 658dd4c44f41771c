//! Connection handling for the SQLite file and DDL for the fixed `user` table.
//! Every operation opens its own connection and releases it when done; nothing is pooled.

use crate::error::{AppError, SettingsError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;

/// Name of the one table with a statically known shape.
pub const USER_TABLE: &str = "user";

const USER_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id INTEGER NOT NULL PRIMARY KEY,
    username VARCHAR(80) NOT NULL UNIQUE,
    email VARCHAR(120) NOT NULL UNIQUE
)
"#;

/// Handle on the database file. Cheap to clone; holds connect options only.
#[derive(Clone, Debug)]
pub struct Store {
    options: SqliteConnectOptions,
}

impl Store {
    /// Parse a `sqlite:` URL. The file is created on first connect if it does not exist.
    pub fn from_url(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|_| SettingsError::InvalidValue {
                name: "DATABASE_URL",
                value: database_url.to_string(),
            })?
            .create_if_missing(true);
        Ok(Store { options })
    }

    /// Open a fresh connection. Pair every call with [`Store::release`].
    pub async fn connect(&self) -> Result<SqliteConnection, AppError> {
        let conn = self.options.connect().await?;
        Ok(conn)
    }

    /// Close a connection opened by [`Store::connect`]. A failed close is logged, never surfaced.
    pub async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close store connection");
        }
    }

    /// Create the `user` table if it is missing.
    pub async fn ensure_user_table(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        tracing::debug!(sql = %USER_TABLE_DDL.trim(), "ddl");
        let result = sqlx::query(USER_TABLE_DDL).execute(&mut conn).await;
        self.release(conn).await;
        result?;
        Ok(())
    }

    /// Round-trip a trivial statement. Used by the readiness probe.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").fetch_optional(&mut conn).await;
        self.release(conn).await;
        result?;
        Ok(())
    }
}

/// Roll back and hand back the error that caused it. A rollback failure is logged; the original error wins.
pub(crate) async fn rollback_with<E>(tx: sqlx::Transaction<'_, sqlx::Sqlite>, err: E) -> AppError
where
    E: Into<AppError>,
{
    let err = err.into();
    if let Err(rb) = tx.rollback().await {
        tracing::warn!(error = %rb, cause = %err, "rollback failed");
    } else {
        tracing::debug!(cause = %err, "transaction rolled back");
    }
    err
}
