use anyhow::Result;
use sqlx::{SqlitePool, migrate::MigrateDatabase, Sqlite};
use std::path::Path;
use tracing::info;

use crate::database::models::Idea;
use crate::database::seed::{SeedIdea, SEED_VERSION};
use crate::utils::logging::{log_database_error, log_database_operation};

#[derive(Clone)]
pub struct DatabaseManager {
    pub pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_parent_dir(database_url)?;

        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePool::connect(database_url).await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Inserts `dataset` when the ideas table is empty. Returns the number of
    /// rows inserted, which is 0 for an already populated table.
    pub async fn seed_ideas_if_empty(&self, dataset: &[SeedIdea]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        let existing = Idea::count(&mut *tx).await?;
        if existing > 0 {
            log_database_operation("SEED", "ideas", Some(&format!("skipped, {existing} rows present")));
            tx.rollback().await?;
            return Ok(0);
        }

        for idea in dataset {
            if let Err(e) = Idea::create(&mut *tx, idea.text, idea.image_path).await {
                log_database_error("SEED", "ideas", &e.to_string(), Some(idea.text));
                return Err(e.into());
            }
        }

        tx.commit().await?;
        info!("Seeded {} ideas (dataset v{})", dataset.len(), SEED_VERSION);
        Ok(dataset.len())
    }
}

/// SQLite will not create missing directories for the database file.
fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        return Ok(());
    };

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating directory {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Extracts the file path from a `sqlite:` url, `None` for in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}
