//! Typed access to the fixed `user` table.

use crate::error::AppError;
use crate::model::{NewUser, User};
use crate::store::{rollback_with, Store};
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

pub struct UserRepository;

impl UserRepository {
    /// Insert and commit. Returns the new row id. Uniqueness violations roll back and surface as database errors.
    pub async fn create(store: &Store, user: &NewUser) -> Result<i64, AppError> {
        let mut conn = store.connect().await?;
        let result = Self::create_on(&mut conn, user).await;
        store.release(conn).await;
        result
    }

    pub async fn list(store: &Store) -> Result<Vec<User>, AppError> {
        let mut conn = store.connect().await?;
        let result = sqlx::query_as::<_, User>(r#"SELECT id, username, email FROM "user""#)
            .fetch_all(&mut conn)
            .await;
        store.release(conn).await;
        Ok(result?)
    }

    pub async fn find(store: &Store, id: i64) -> Result<Option<User>, AppError> {
        let mut conn = store.connect().await?;
        let result = sqlx::query_as::<_, User>(r#"SELECT id, username, email FROM "user" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        store.release(conn).await;
        Ok(result?)
    }

    /// Look up by primary key and delete in one transaction.
    pub async fn delete(store: &Store, id: i64) -> Result<User, AppError> {
        let mut conn = store.connect().await?;
        let result = Self::delete_on(&mut conn, id).await;
        store.release(conn).await;
        result
    }

    async fn create_on(conn: &mut SqliteConnection, user: &NewUser) -> Result<i64, AppError> {
        let mut tx = conn.begin().await?;
        tracing::debug!(username = %user.username, "insert user");
        let inserted = sqlx::query(r#"INSERT INTO "user" (username, email) VALUES (?, ?)"#)
            .bind(&user.username)
            .bind(&user.email)
            .execute(&mut *tx)
            .await;
        let id = match inserted {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => return Err(rollback_with(tx, e).await),
        };
        tx.commit().await?;
        Ok(id)
    }

    async fn delete_on(conn: &mut SqliteConnection, id: i64) -> Result<User, AppError> {
        let mut tx = conn.begin().await?;
        let found = sqlx::query_as::<_, User>(r#"SELECT id, username, email FROM "user" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await;
        let user = match found {
            Ok(Some(user)) => user,
            Ok(None) => return Err(rollback_with(tx, AppError::NotFound("Record not found".into())).await),
            Err(e) => return Err(rollback_with(tx, e).await),
        };
        let deleted = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(&mut *tx)
            .await;
        if let Err(e) = deleted {
            return Err(rollback_with(tx, e).await);
        }
        tx.commit().await?;
        tracing::debug!(id, "deleted user");
        Ok(user)
    }
}
