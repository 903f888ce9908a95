use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::logging::log_database_operation;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub user_id: i64, // telegram id
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
}

impl User {
    pub async fn find_by_user_id(
        pool: &sqlx::SqlitePool,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, user_id, username, first_name, last_name, created_at FROM users WHERE user_id = ?"
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Returns the stored user and whether this call created it.
    ///
    /// An existing row is returned as-is; the supplied profile fields only
    /// apply to the first insert. Two concurrent calls for the same id both
    /// succeed and exactly one of them reports `true`.
    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        username: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<(Self, bool), sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (user_id, username, first_name, last_name, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(now)
        .execute(pool)
        .await?
        .rows_affected();

        let created = inserted == 1;
        log_database_operation(
            if created { "INSERT" } else { "SELECT" },
            "users",
            Some(&format!("user_id={user_id}")),
        );

        let user = Self::find_by_user_id(pool, user_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok((user, created))
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
