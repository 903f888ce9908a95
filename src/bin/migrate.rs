use anyhow::{Result, anyhow};
use date_idea_bot::config::database_url_from_env;
use date_idea_bot::database::connection::{sqlite_file_path, DatabaseManager};
use date_idea_bot::database::models::{Idea, User};
use date_idea_bot::database::seed::{DEFAULT_IDEAS, SEED_VERSION};
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await.map(|_| ()),
        "seed" => seed_database().await,
        "check" => check_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn run_migrations() -> Result<DatabaseManager> {
    println!("💘 Date Idea Bot - Database Migration Tool");
    println!("==========================================");

    let database_url = database_url_from_env();
    println!("📊 Database URL: {}", mask_url(&database_url));

    println!("🚀 Running database migrations...");

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match db_manager.run_migrations().await {
        Ok(_) => println!("✅ Migrations completed successfully!"),
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(db_manager)
}

async fn seed_database() -> Result<()> {
    let db_manager = run_migrations().await?;

    println!("🌱 Seeding built-in ideas (dataset v{SEED_VERSION})...");
    let inserted = db_manager.seed_ideas_if_empty(DEFAULT_IDEAS).await?;
    if inserted > 0 {
        println!("✅ Inserted {inserted} ideas");
    } else {
        println!("ℹ️  Ideas table already populated, nothing to do");
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let database_url = database_url_from_env();
    println!("📊 Database URL: {}", mask_url(&database_url));

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match check_tables(&db_manager).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            return Ok(());
        }
    }

    match (User::count(&db_manager.pool).await, Idea::count(&db_manager.pool).await) {
        (Ok(users), Ok(ideas)) => {
            println!("👥 Users: {users}");
            println!("💡 Ideas: {ideas}");
        }
        _ => println!("💡 Try running 'migrate up' to create the schema"),
    }

    Ok(())
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name"
    )
    .fetch_all(&db_manager.pool)
    .await?;

    Ok(names)
}

fn mask_url(url: &str) -> String {
    // Only show the file name of SQLite databases
    match sqlite_file_path(url).and_then(|path| Path::new(path).file_name()) {
        Some(filename) => format!("sqlite:.../{}", filename.to_string_lossy()),
        None => url.to_string(),
    }
}

fn print_help() {
    println!("💘 Date Idea Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    seed           Run migrations and load built-in ideas if the table is empty");
    println!("    check          Check database connection, schema and row counts");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/date_bot.db)");
    println!();
}
