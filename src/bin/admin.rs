//! CLI administration tool for account-service.
//!
//! Provides commands for inspecting accounts, minting credentials, and
//! preparing the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the account table
//! cargo run --bin admin -- db init
//!
//! # List accounts
//! cargo run --bin admin -- account list
//!
//! # Delete an account
//! cargo run --bin admin -- account delete 42
//!
//! # Issue a fresh credential for an existing account
//! cargo run --bin admin -- token issue 42
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `JWT_SECRET` (required for `token issue`): credential signing secret
//! - `JWT_TTL_SECONDS` (optional): default credential lifetime

use account_service::application::services::CredentialService;
use account_service::config::MAX_JWT_TTL_SECONDS;
use account_service::domain::repositories::AccountRepository;
use account_service::infrastructure::persistence::PgAccountRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing account-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and remove accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Issue credentials
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// List all accounts
    List,

    /// Show a single account
    Show {
        /// Account ID
        id: i64,
    },

    /// Delete an account
    Delete {
        /// Account ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Credential subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a credential for an existing account
    Issue {
        /// Account ID
        id: i64,

        /// Lifetime in seconds (defaults to JWT_TTL_SECONDS or 60, at most one day)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_JWT_TTL_SECONDS))]
        ttl: Option<i64>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the account table if it does not exist
    Init,

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = PgAccountRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &repo).await?,
        Commands::Token { action } => handle_token_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &pool).await?,
    }

    Ok(())
}

/// Dispatches account commands.
async fn handle_account_action(action: AccountAction, repo: &PgAccountRepository) -> Result<()> {
    match action {
        AccountAction::List => list_accounts(repo).await,
        AccountAction::Show { id } => show_account(repo, id).await,
        AccountAction::Delete { id, yes } => delete_account(repo, id, yes).await,
    }
}

/// Lists all accounts.
///
/// # Output Format
///
/// ```text
/// Accounts
///
///   ID    Name                           Number       Balance      Created
///   ───────────────────────────────────────────────────────────────────────────
///   1     Ada Lovelace                   483920115    0            2024-01-15 10:30
/// ```
async fn list_accounts(repo: &PgAccountRepository) -> Result<()> {
    println!("{}", "Accounts".bright_blue().bold());
    println!();

    let accounts = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if accounts.is_empty() {
        println!("{}", "  No accounts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<12} {:<12} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Number".bright_white().bold(),
        "Balance".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for account in &accounts {
        let name = format!("{} {}", account.first_name, account.last_name);
        println!(
            "  {:<5} {:<30} {:<12} {:<12} {}",
            account.id.to_string().bright_black(),
            name.cyan(),
            account.number,
            account.balance,
            account
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        accounts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one account.
async fn show_account(repo: &PgAccountRepository, id: i64) -> Result<()> {
    let account = repo
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "Account".bright_blue().bold());
    println!();
    println!("  ID:      {}", account.id.to_string().bright_white());
    println!(
        "  Name:    {}",
        format!("{} {}", account.first_name, account.last_name).cyan()
    );
    println!("  Number:  {}", account.number);
    println!("  Balance: {}", account.balance.to_string().bright_green());
    println!("  Created: {}", account.created_at.to_rfc3339().bright_black());
    println!();

    Ok(())
}

/// Deletes an account after confirmation (default: No).
async fn delete_account(repo: &PgAccountRepository, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete Account".bright_blue().bold());
    println!();

    let account = repo
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!(
        "  Account: {}",
        format!("{} {}", account.first_name, account.last_name).cyan()
    );
    println!("  ID:      {}", account.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this account?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!("{}", "Account deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches credential commands.
async fn handle_token_action(action: TokenAction, repo: &PgAccountRepository) -> Result<()> {
    match action {
        TokenAction::Issue { id, ttl } => issue_token(repo, id, ttl).await,
    }
}

/// Issues a credential for an existing account.
///
/// The token embeds the account as it is stored now.
async fn issue_token(repo: &PgAccountRepository, id: i64, ttl: Option<i64>) -> Result<()> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    anyhow::ensure!(!secret.is_empty(), "JWT_SECRET must not be empty");

    let ttl_seconds = match ttl {
        Some(ttl) => ttl,
        None => std::env::var("JWT_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60),
    };
    anyhow::ensure!(
        (1..=MAX_JWT_TTL_SECONDS).contains(&ttl_seconds),
        "TTL must be between 1 and {}, got {}",
        MAX_JWT_TTL_SECONDS,
        ttl_seconds
    );

    let account = repo
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let ttl = chrono::Duration::try_seconds(ttl_seconds).context("TTL out of range")?;
    let credentials = CredentialService::new(&secret, ttl);
    let token = credentials
        .issue_token(&account)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!("{}", "Credential issued".green().bold());
    println!();
    println!(
        "  Account: {} ({})",
        format!("{} {}", account.first_name, account.last_name).cyan(),
        account.id
    );
    println!("  Expires: in {}s", ttl_seconds);
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, repo: &PgAccountRepository, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Init => {
            repo.init_schema()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create account table: {}", e))?;

            println!("{}", "Account table ready".green().bold());
        }
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            if !repo.health_check().await {
                anyhow::bail!("Database connection failed");
            }

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM account")
                .fetch_one(pool)
                .await
                .context("Failed to count accounts (run `admin db init` first?)")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Accounts:   {}", accounts.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
