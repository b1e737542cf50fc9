//! CLI administration tool for link-shortener.
//!
//! Inspects and deletes links, checks slugs and shows statistics directly
//! against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a link
//! cargo run --bin admin -- link show <id>
//!
//! # Soft-delete a link
//! cargo run --bin admin -- link delete <id>
//!
//! # Check whether a slug can be used
//! cargo run --bin admin -- slug check my-slug
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

use link_shortener::application::services::slug_availability;
use link_shortener::domain::entities::Link;
use link_shortener::domain::errors::LinkError;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Inspect or delete links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Check slugs
    Slug {
        #[command(subcommand)]
        action: SlugAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show a link by id
    Show { id: String },

    /// Soft-delete a link by id
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SlugAction {
    /// Check format and availability of a slug
    Check { slug: String },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[derive(FromRow)]
struct LinkStats {
    total: i64,
    active: i64,
    deleted: i64,
    views: i64,
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
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Slug { action } => handle_slug_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool.clone()))
}

async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = repository(pool);

    match action {
        LinkAction::Show { id } => show_link(&repo, &id).await,
        LinkAction::Delete { id, yes } => delete_link(&repo, &id, yes).await,
    }
}

async fn show_link(repo: &PgLinkRepository, id: &str) -> Result<()> {
    let link = repo
        .find_by_id(id)
        .await
        .context("Failed to load link")?
        .context("Link not found")?;

    print_link(&link);
    Ok(())
}

fn print_link(link: &Link) {
    let status = if link.is_deleted() {
        "DELETED".red()
    } else {
        "ACTIVE".green()
    };

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  ID:      {}", link.id.bright_black());
    println!("  Slug:    {}", link.slug.cyan());
    println!("  URL:     {}", link.url.bright_white());
    println!("  Views:   {}", link.view_count.to_string().bright_green());
    println!(
        "  Created: {}",
        link.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    if let Some(deleted_at) = link.deleted_at {
        println!(
            "  Deleted: {}",
            deleted_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
    }
    println!("  Status:  {status}");
    println!();
}

/// Soft-deletes a link after confirmation.
///
/// Uses the same conditional write as the API, so a link deleted
/// concurrently is reported as already deleted.
async fn delete_link(repo: &PgLinkRepository, id: &str, skip_confirm: bool) -> Result<()> {
    let link = repo
        .find_by_id(id)
        .await
        .context("Failed to load link")?
        .context("Link not found")?;

    if link.is_deleted() {
        println!("{}", "⚠️  Link already deleted".yellow());
        return Ok(());
    }

    print_link(&link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if repo.soft_delete(id).await.context("Failed to delete link")? {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Link already deleted".yellow());
    }
    println!();

    Ok(())
}

async fn handle_slug_action(action: SlugAction, pool: &PgPool) -> Result<()> {
    match action {
        SlugAction::Check { slug } => {
            match slug_availability(&repository(pool), &slug).await {
                Ok(()) => println!("{}", format!("✅ '{slug}' is available").green().bold()),
                Err(LinkError::Store(e)) => {
                    return Err(e).context("Failed to look up slug");
                }
                Err(e) => println!("{} {}", "❌".red(), e.to_string().red()),
            }
        }
    }

    Ok(())
}

/// Displays link statistics.
///
/// Shows total, active and deleted links, and the sum of all views.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats: LinkStats = sqlx::query_as(
        r#"
        SELECT COUNT(*) AS total,
               COUNT(*) FILTER (WHERE deleted_at IS NULL) AS active,
               COUNT(*) FILTER (WHERE deleted_at IS NOT NULL) AS deleted,
               COALESCE(SUM(view_count), 0)::BIGINT AS views
        FROM links
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!("  Links:   {}", stats.total.to_string().bright_green().bold());
    println!("  Active:  {}", stats.active.to_string().bright_green());
    println!("  Deleted: {}", stats.deleted.to_string().bright_black());
    println!("  Views:   {}", stats.views.to_string().bright_green().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if repository(pool).health_check().await {
                println!("{}", "✅ Database connection OK".green().bold());
            } else {
                anyhow::bail!("Database did not answer");
            }
        }
    }

    Ok(())
}
