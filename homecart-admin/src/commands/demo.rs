//! Demo-environment generation commands.

use crate::context::AdminContext;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use homecart_demo::{generate_family_environment, generate_structured_environment};
use homecart_store::AuthDirectory;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub async fn generate_family(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Generating the family demo environment…".bold());

    let env = generate_family_environment(
        &ctx.store,
        &ctx.directory,
        StdRng::from_entropy(),
        Utc::now(),
    )
    .await?;

    println!();
    println!("{}", "Environment:".bold());
    println!("  users:     {}", env.users);
    println!("  lists:     {}", env.lists);
    println!("  receipts:  {}", env.receipts);
    println!("  inventory: {}", env.inventory_items);
    println!("  catalog:   {} products available", env.catalog_size);

    if !env.is_clean() {
        bail!("{} steps failed — see the log above", env.errored);
    }
    println!("{}", "done: demo environment ready, log in with a demo account".green().bold());
    Ok(())
}

pub async fn create_structured(ctx: &AdminContext, household: &str) -> Result<()> {
    println!("{}", "Generating structured demo data from real products…".bold());

    // The plans attribute everything to the demo son's account.
    let owner = ctx
        .directory
        .get_user_by_email("yoni@demo.com")
        .await
        .context("demo account yoni@demo.com not found — run create-demo-users first")?;

    let env = generate_structured_environment(
        &ctx.store,
        StdRng::from_entropy(),
        household,
        &owner.uid,
        Utc::now(),
    )
    .await?;

    println!();
    println!("{}", "Created:".bold());
    println!("  lists:     {}", env.lists);
    println!("  inventory: {}", env.inventory_items);
    println!("  receipts:  {}", env.receipts);
    println!(
        "{} all records built from {} real catalog products",
        "done:".green().bold(),
        env.catalog_size
    );
    Ok(())
}
