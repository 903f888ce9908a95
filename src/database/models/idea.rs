use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub text: String,
    pub image_path: Option<String>,
}

impl Idea {
    pub async fn create<'e, E>(
        executor: E,
        text: &str,
        image_path: Option<&str>,
    ) -> Result<i64, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("INSERT INTO ideas (text, image_path) VALUES (?, ?)")
            .bind(text)
            .bind(image_path)
            .execute(executor)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Picks one idea uniformly at random, or `None` when the table is empty.
    pub async fn pick_random(pool: &sqlx::SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Idea>(
            "SELECT id, text, image_path FROM ideas ORDER BY RANDOM() LIMIT 1"
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Idea>("SELECT id, text, image_path FROM ideas WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ideas")
            .fetch_one(executor)
            .await
    }
}
