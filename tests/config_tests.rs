use date_idea_bot::config::Config;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "DATABASE_URL",
    "HTTP_PORT",
    "IDEA_DELAY_MS",
    "MANAGER_URL",
    "LOG_DIR",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("IDEA_DELAY_MS", "250");
    env::set_var("MANAGER_URL", "https://t.me/somebody");
    env::set_var("LOG_DIR", "./logs");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.idea_delay, Duration::from_millis(250));
    assert_eq!(config.manager_url.as_str(), "https://t.me/somebody");
    assert_eq!(config.log_dir.as_deref(), Some(std::path::Path::new("./logs")));

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Only set required token, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/date_bot.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.idea_delay, Duration::from_secs(2));
    assert_eq!(config.manager_url.as_str(), "https://t.me/hellobotstudio");
    assert!(config.log_dir.is_none());

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_blank_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_invalid_delay() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("IDEA_DELAY_MS", "-5");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid IDEA_DELAY_MS"));

    // Zero disables the pause
    env::set_var("IDEA_DELAY_MS", " 0 ");
    let config = Config::from_env().unwrap();
    assert_eq!(config.idea_delay, Duration::ZERO);

    clear_env();
}

#[test]
fn test_config_invalid_manager_url() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("MANAGER_URL", "not a url");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid MANAGER_URL"));

    clear_env();
}

#[test]
fn test_config_empty_values_use_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("DATABASE_URL", "");
    env::set_var("MANAGER_URL", "");
    env::set_var("LOG_DIR", "");

    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/date_bot.db");
    assert_eq!(config.manager_url.as_str(), "https://t.me/hellobotstudio");
    assert!(config.log_dir.is_none());

    clear_env();
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "  token_with_spaces  ");
    env::set_var("HTTP_PORT", "  3000  ");
    env::set_var("MANAGER_URL", "  https://t.me/hellobotstudio  ");

    let config = Config::from_env().unwrap();

    // The token is kept as-is, numbers and urls are trimmed
    assert_eq!(config.telegram_bot_token, "  token_with_spaces  ");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.manager_url.as_str(), "https://t.me/hellobotstudio");

    clear_env();
}
