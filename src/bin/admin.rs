//! CLI administration tool for user-api.
//!
//! Manages users directly against the database, without going through the
//! HTTP API. Uses the same validation rules and password hashing as the
//! service.
//!
//! # Usage
//!
//! ```bash
//! # List users
//! cargo run --bin admin -- user list --page 2
//!
//! # Create a user (prompts for missing fields and the password)
//! cargo run --bin admin -- user create --name "Ada" --email ada@example.com
//!
//! # Delete a user
//! cargo run --bin admin -- user delete 42
//!
//! # Check a password against the stored hash
//! cargo run --bin admin -- user check-password 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use user_api::api::dto::user::CreateUserRequest;
use user_api::api::validation::{ValidationResult, validate_request};
use user_api::application::services::UserService;
use user_api::config::{self, StorageBackend};
use user_api::infrastructure::persistence::PgUserRepository;
use user_api::server::connect_pool;
use user_api::utils::password::verify_password;

use anyhow::{Context, Result};
use axum::Json;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-api.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List users, one page at a time
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short = 's', long)]
        page_size: Option<u32>,
    },

    /// Create a user
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short = 't', long)]
        phone: Option<String>,
    },

    /// Delete a user by id
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check a password against a user's stored hash
    CheckPassword { id: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin only works with the postgres storage backend");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => {
            let repository = Arc::new(PgUserRepository::new(Arc::new(pool)));
            let service = UserService::new(repository, config.user_service_settings());
            handle_user_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, service: &UserService) -> Result<()> {
    match action {
        UserAction::List { page, page_size } => list_users(service, page, page_size).await,
        UserAction::Create { name, email, phone } => {
            create_user(service, name, email, phone).await
        }
        UserAction::Delete { id, yes } => delete_user(service, id, yes).await,
        UserAction::CheckPassword { id } => check_password(service, id).await,
    }
}

/// Prints one page of users.
///
/// # Output Format
///
/// ```text
/// Users (page 1 of 3, 24 total)
///
///   ID   Name                  Email                          Phone
///   ─────────────────────────────────────────────────────────────────────
///   1    Ada                   ada@example.com                +44 20 7946 0000
/// ```
async fn list_users(service: &UserService, page: u32, page_size: Option<u32>) -> Result<()> {
    let result = service
        .list_users(Some(page), page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    println!(
        "{}",
        format!(
            "Users (page {} of {}, {} total)",
            result.page, result.total_pages, result.total
        )
        .bright_blue()
        .bold()
    );
    println!();

    if result.data.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<21} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Phone".bright_white().bold()
    );
    println!("  {}", "─".repeat(69).bright_black());

    for user in &result.data {
        println!(
            "  {:<4} {:<21} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.phone.bright_black()
        );
    }
    println!();

    Ok(())
}

/// Creates a user with interactive prompts for anything not passed as a flag.
///
/// The password is always prompted (with confirmation) and never echoed.
async fn create_user(
    service: &UserService,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    println!("{}", "Create user".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let phone = match phone {
        Some(p) => p,
        None => Input::new().with_prompt("Phone").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    let body = json!({
        "name": name,
        "email": email,
        "phone": phone,
        "password": password,
    });

    let data = match validate_request::<CreateUserRequest>(Ok(Json(body))) {
        ValidationResult::Data(data) => data,
        ValidationResult::Error(error) => {
            println!("{}", "Invalid input:".red().bold());
            println!("{}", serde_json::to_string_pretty(&error)?);
            anyhow::bail!("validation failed");
        }
    };

    let user = service
        .create_user(data.name, data.email, data.phone, data.password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {}",
        "User created with id".green().bold(),
        user.id.to_string().bright_white().bold()
    );

    Ok(())
}

/// Deletes a user after confirmation (default: No).
async fn delete_user(service: &UserService, id: String, skip_confirm: bool) -> Result<()> {
    let user = service
        .find_user(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .into_iter()
        .next()
        .context("user not found")?;

    println!("  User:  {}", user.name.cyan());
    println!("  Email: {}", user.email);
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());

    Ok(())
}

/// Prompts for a password and reports whether it matches the stored hash.
async fn check_password(service: &UserService, id: String) -> Result<()> {
    let user = service
        .find_user(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .into_iter()
        .next()
        .context("user not found")?;

    println!("  User:  {}", user.name.cyan());
    println!("  Email: {}", user.email);
    println!();

    let password = Password::new().with_prompt("Password").interact()?;

    let matches = verify_password(&password, &user.password)
        .map_err(|e| anyhow::anyhow!("Stored hash is unreadable: {}", e))?;

    if matches {
        println!("{}", "Password matches".green().bold());
    } else {
        println!("{}", "Password does not match".red().bold());
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Users: {}", users.to_string().bright_white().bold());
        }
    }

    Ok(())
}
