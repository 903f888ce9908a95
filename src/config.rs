use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/date_bot.db";
const DEFAULT_MANAGER_URL: &str = "https://t.me/hellobotstudio";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    /// Pause between the "searching" acknowledgment and the idea itself.
    pub idea_delay: Duration,
    pub manager_url: Url,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = database_url_from_env();

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let delay_str = env::var("IDEA_DELAY_MS")
            .unwrap_or_else(|_| "2000".to_string());
        let delay_ms: u64 = delay_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid IDEA_DELAY_MS"))?;

        let manager_str = env::var("MANAGER_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MANAGER_URL.to_string());
        let manager_url = Url::parse(manager_str.trim())
            .map_err(|e| anyhow!("Invalid MANAGER_URL: {}", e))?;

        let log_dir = env::var("LOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            idea_delay: Duration::from_millis(delay_ms),
            manager_url,
            log_dir,
        })
    }
}

/// `DATABASE_URL`, falling back to the default when unset or blank.
pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}
