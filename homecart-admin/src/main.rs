//! Homecart admin CLI.
//!
//! One subcommand per administrative task: seeding templates and products,
//! provisioning and repairing demo accounts, generating demo environments,
//! and running the schema migrations. Each invocation connects once, runs a
//! bounded batch of reads and writes, prints a summary, and exits — 0 on
//! full success, 1 on any failure (including partial ones).
//!
//! Configuration comes from the environment: a service-account credential
//! file (`GOOGLE_APPLICATION_CREDENTIALS`), an optional
//! `HOMECART_PROJECT_ID` override, and an optional pre-minted
//! `GOOGLE_OAUTH_ACCESS_TOKEN`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod context;

use context::AdminContext;

#[derive(Parser)]
#[command(name = "homecart-admin")]
#[command(author, version, about = "Administrative one-shot commands for the Homecart backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the shared system templates (one batched commit, overwrite by id).
    SeedTemplates,

    /// Upload a products JSON file into the catalog, keyed by barcode.
    UploadProducts {
        /// Path of the products JSON file (an array of product objects).
        file: PathBuf,
    },

    /// Create (or adopt) the three demo accounts and their profiles.
    CreateDemoUsers,

    /// Create (or adopt) the five-person demo family and their profiles.
    CreateDemoFamily,

    /// Rewrite the legacy placeholder profiles to the canonical shape.
    RepairDemoUsers,

    /// Delete the legacy placeholder profile documents.
    CleanupDemoUsers,

    /// List every account in the auth directory.
    ListUsers,

    /// Look up the demo family's uids by email.
    FindDemoUids,

    /// Generate the full family demo environment (lists, receipts, pantry).
    GenerateDemoData,

    /// Generate the plan-driven single-user demo data from real products.
    CreateDemoData {
        /// Household the generated records belong to.
        #[arg(long, default_value = "house_demo")]
        household: String,
    },

    /// Migrate legacy shopping-list items to the unified item shape.
    MigrateItems,

    /// Rename list type "super" to "supermarket" across all lists.
    MigrateListTypes,

    /// Delete every shopping list of one household.
    DeleteLists {
        /// Household whose lists are removed.
        #[arg(long)]
        household: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let ctx = AdminContext::connect().await?;

    match cli.command {
        Commands::SeedTemplates => commands::templates::seed(&ctx).await,
        Commands::UploadProducts { file } => commands::products::upload(&ctx, &file).await,
        Commands::CreateDemoUsers => commands::users::create_demo_users(&ctx).await,
        Commands::CreateDemoFamily => commands::users::create_demo_family(&ctx).await,
        Commands::RepairDemoUsers => commands::users::repair(&ctx).await,
        Commands::CleanupDemoUsers => commands::users::cleanup(&ctx).await,
        Commands::ListUsers => commands::users::list(&ctx).await,
        Commands::FindDemoUids => commands::users::find_demo_uids(&ctx).await,
        Commands::GenerateDemoData => commands::demo::generate_family(&ctx).await,
        Commands::CreateDemoData { household } => {
            commands::demo::create_structured(&ctx, &household).await
        }
        Commands::MigrateItems => commands::migrate::items(&ctx).await,
        Commands::MigrateListTypes => commands::migrate::list_types(&ctx).await,
        Commands::DeleteLists { household } => commands::lists::delete(&ctx, &household).await,
    }
}
