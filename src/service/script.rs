//! Ad-hoc SQL scripts run with full privileges against the store.

use crate::error::AppError;
use crate::model::{Record, ScriptOutcome};
use crate::sql::row_to_json;
use crate::store::{rollback_with, Store};
use sqlx::sqlite::SqliteConnection;
use sqlx::{Connection, Executor};

pub struct ScriptRunner;

impl ScriptRunner {
    /// Run `script` as one batch inside a transaction and commit. If the trimmed script starts with
    /// `select` (any case), the whole text is then executed once more, in a transaction that is
    /// rolled back, to collect rows.
    ///
    /// Any failure in the batch rolls back every statement in it. A script that opens its own
    /// transaction fails, since the batch is already inside one.
    pub async fn run(store: &Store, script: &str) -> Result<ScriptOutcome, AppError> {
        let mut conn = store.connect().await?;
        let result = Self::run_on(&mut conn, script).await;
        store.release(conn).await;
        result
    }

    async fn run_on(conn: &mut SqliteConnection, script: &str) -> Result<ScriptOutcome, AppError> {
        tracing::debug!(sql = %script, "script");
        let mut tx = conn.begin().await?;
        let batch = Executor::execute(&mut *tx, sqlx::raw_sql(script)).await;
        let changed = match batch {
            Ok(done) => done.rows_affected(),
            Err(e) => return Err(rollback_with(tx, e).await),
        };
        tx.commit().await?;

        let rows = if starts_with_select(script) {
            Self::replay_for_rows(conn, script).await?
        } else {
            Vec::new()
        };
        tracing::info!(rows_affected = changed, rows_returned = rows.len(), "script executed");
        Ok(ScriptOutcome { success: true, rows })
    }

    /// Re-run the committed script only to read rows. Always rolled back, so any
    /// write statements in it take effect once, from the batch.
    async fn replay_for_rows(conn: &mut SqliteConnection, script: &str) -> Result<Vec<Record>, AppError> {
        let mut tx = conn.begin().await?;
        let fetched = sqlx::query(script)
            .persistent(false)
            .fetch_all(&mut *tx)
            .await;
        let rows = match fetched {
            Ok(rows) => rows.iter().map(row_to_json).collect(),
            Err(e) => return Err(rollback_with(tx, e).await),
        };
        tx.rollback().await?;
        Ok(rows)
    }
}

fn starts_with_select(script: &str) -> bool {
    script.trim().to_lowercase().starts_with("select")
}
