use sqlite_admin::Store;
use tempfile::TempDir;

/// Store backed by a throwaway database file, with the `user` table created.
/// Keep the guard alive for the duration of the test.
pub struct TestStore {
    pub store: Store,
    _dir: TempDir,
}

pub async fn fresh_store() -> TestStore {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite:{}", dir.path().join("admin.sqlite").display());
    let store = Store::from_url(&url).expect("invalid database url");
    store.ensure_user_table().await.expect("failed to create user table");
    TestStore { store, _dir: dir }
}

#[allow(dead_code)]
pub async fn count(store: &Store, table: &str) -> i64 {
    let outcome = sqlite_admin::ScriptRunner::run(store, &format!("SELECT COUNT(*) AS n FROM \"{}\"", table))
        .await
        .expect("count query failed");
    outcome.rows[0]["n"].as_i64().expect("count is not an integer")
}
