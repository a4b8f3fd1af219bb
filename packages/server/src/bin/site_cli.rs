//! Operator CLI for the site server.
//!
//! ```text
//! site_cli migrate
//! site_cli hash-password 'correct horse battery staple'
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use server_core::domains::auth::hash_password;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "site_cli")]
#[command(about = "GYWAN site maintenance commands")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations (reads DATABASE_URL)
    Migrate,

    /// Print the SHA-256 digest to put in ADMIN_PASSWORD_SHA256
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => cmd_migrate().await,
        Commands::HashPassword { password } => {
            println!("{}", hash_password(&password));
            Ok(())
        }
    }
}

async fn get_pool() -> Result<PgPool> {
    let _ = dotenvy::dotenv();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

async fn cmd_migrate() -> Result<()> {
    let pool = get_pool().await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    println!("Migrations complete");
    Ok(())
}
