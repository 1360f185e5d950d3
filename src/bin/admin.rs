//! CLI administration tool for yatube-api.
//!
//! Provides commands for managing accounts and groups, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//! Accounts and groups have no HTTP write endpoints, so this is how they
//! are created.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for anything not given)
//! cargo run --bin admin -- user create --username leo
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Reset a password
//! cargo run --bin admin -- user set-password leo
//!
//! # Create a group
//! cargo run --bin admin -- group create --title "Cats" --slug cats
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use yatube_api::application::services::{GroupService, UserInput, UserService};
use yatube_api::domain::entities::NewGroup;
use yatube_api::infrastructure::persistence::{PgGroupRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing yatube-api.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted if omitted; generated if left empty at the prompt)
        #[arg(short, long)]
        password: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Replace a user's password
    SetPassword {
        username: String,
    },
}

/// Group management subcommands.
#[derive(Subcommand)]
enum GroupAction {
    /// Create a new group
    Create {
        #[arg(short, long)]
        title: Option<String>,

        /// URL-safe identifier: letters, digits, `-` and `_`
        #[arg(short, long)]
        slug: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all groups
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
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

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Group { action } => handle_group_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::Create {
            username,
            password,
            first_name,
            last_name,
            yes,
        } => {
            let input = UserInput {
                username: prompt_or(username, "Username")?,
                password: match password {
                    Some(p) => p,
                    None => prompt_password()?,
                },
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
            };
            create_user(&service, input, yes).await?;
        }
        UserAction::List => list_users(&service).await?,
        UserAction::SetPassword { username } => {
            let mut password = prompt_password()?;
            if password.is_empty() {
                password = generate_password();
                println!("  New password: {}", password.bright_yellow().bold());
            }

            service
                .set_password(&username, &password)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to set password: {}", e))?;

            println!("{}", "✅ Password updated".green().bold());
        }
    }

    Ok(())
}

/// Creates a user after showing the details and asking for confirmation.
///
/// A password left empty at the prompt is replaced by a generated one,
/// which is shown once.
async fn create_user(
    service: &UserService<PgUserRepository>,
    mut input: UserInput,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let generated = input.password.is_empty();
    if generated {
        input.password = generate_password();
    }

    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", input.username.cyan());
    if !input.first_name.is_empty() || !input.last_name.is_empty() {
        println!("  Name:     {} {}", input.first_name, input.last_name);
    }
    if generated {
        println!("  Password: {}", input.password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  IMPORTANT: Save this password now! You won't be able to see it again."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create(input)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("{}", "Obtain a token with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" \\\n    -d '{{\"username\": \"{}\", \"password\": \"...\"}}' \\\n    http://localhost:3000/v1/jwt/create/",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username                       Joined               Status
///   ───────────────────────────────────────────────────────────────────────────
///   1   leo                            2024-01-15 10:30     ACTIVE
/// ```
async fn list_users(service: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Joined".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        let status = if user.is_active {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };

        println!(
            "  {:<3} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.date_joined
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches group management commands.
async fn handle_group_action(action: GroupAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgGroupRepository::new(Arc::new(pool.clone())));
    let service = GroupService::new(repo);

    match action {
        GroupAction::Create {
            title,
            slug,
            description,
            yes,
        } => {
            let new_group = NewGroup {
                title: prompt_or(title, "Title")?,
                slug: prompt_or(slug, "Slug")?,
                description: description.unwrap_or_default(),
            };
            create_group(&service, new_group, yes).await?;
        }
        GroupAction::List => list_groups(&service).await?,
    }

    Ok(())
}

async fn create_group(
    service: &GroupService<PgGroupRepository>,
    new_group: NewGroup,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🏷️  Create Group".bright_blue().bold());
    println!();
    println!("  Title: {}", new_group.title.cyan());
    println!("  Slug:  {}", new_group.slug.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this group?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let group = service
        .create(new_group)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create group: {}", e))?;

    println!(
        "{} (id {})",
        "✅ Group created successfully!".green().bold(),
        group.id.to_string().bright_white()
    );

    Ok(())
}

async fn list_groups(service: &GroupService<PgGroupRepository>) -> Result<()> {
    println!("{}", "📋 Groups".bright_blue().bold());
    println!();

    let groups = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list groups: {}", e))?;

    if groups.is_empty() {
        println!("{}", "  No groups found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<30}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for group in &groups {
        println!(
            "  {:<3} {:<30} {}",
            group.id.to_string().bright_black(),
            group.slug.cyan(),
            group.title
        );
    }

    println!();
    println!("  Total: {}", groups.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows counts of users, posts, comments and follows.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let posts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    let comments_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;

    let follows_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows")
        .fetch_one(pool)
        .await?;

    println!("  Users:    {}", users_count.to_string().bright_green().bold());
    println!("  Posts:    {}", posts_count.to_string().bright_green().bold());
    println!(
        "  Comments: {}",
        comments_count.to_string().bright_green().bold()
    );
    println!(
        "  Follows:  {}",
        follows_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

fn prompt_or(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

fn prompt_password() -> Result<String> {
    Ok(Password::new()
        .with_prompt("Password (empty to generate)")
        .allow_empty_password(true)
        .interact()?)
}

/// Generates a random password.
///
/// # Format
///
/// - Length: 20 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
