use tracing::{error, info, warn};

use crate::database::connection::DatabaseManager;
use crate::database::models::Idea;

/// Result of asking the store for a random idea.
#[derive(Debug)]
pub enum IdeaOutcome {
    Found(Idea),
    Empty,
    Failed(sqlx::Error),
}

/// Picks random ideas from the store and logs what came back.
#[derive(Clone)]
pub struct IdeaSelector {
    db: DatabaseManager,
}

impl IdeaSelector {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    pub async fn select(&self) -> IdeaOutcome {
        info!("Fetching random idea from the database");

        match Idea::pick_random(&self.db.pool).await {
            Ok(Some(idea)) => {
                info!("Random idea found: id={} image={:?}", idea.id, idea.image_path);
                IdeaOutcome::Found(idea)
            }
            Ok(None) => {
                warn!("No ideas available in the database");
                IdeaOutcome::Empty
            }
            Err(e) => {
                error!("Failed to fetch random idea: {}", e);
                IdeaOutcome::Failed(e)
            }
        }
    }
}
