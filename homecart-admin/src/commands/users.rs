//! Demo-account commands: create, repair, clean up, list, look up.

use crate::context::AdminContext;
use anyhow::{bail, Result};
use chrono::Utc;
use colored::Colorize;
use homecart_demo::{
    DemoUser, UserProvisioner, DEMO_FAMILY, DEMO_HOUSEHOLD_ID, DEMO_STORES, DEMO_USERS,
    FAMILY_HOUSEHOLD_ID, FAMILY_STORES,
};
use homecart_store::AuthDirectory;

pub async fn create_demo_users(ctx: &AdminContext) -> Result<()> {
    provision(ctx, DEMO_USERS, DEMO_HOUSEHOLD_ID, DEMO_STORES, "demo users").await
}

pub async fn create_demo_family(ctx: &AdminContext) -> Result<()> {
    provision(
        ctx,
        DEMO_FAMILY,
        FAMILY_HOUSEHOLD_ID,
        FAMILY_STORES,
        "demo family",
    )
    .await
}

async fn provision(
    ctx: &AdminContext,
    roster: &[DemoUser],
    household_id: &str,
    stores: &[&str],
    label: &str,
) -> Result<()> {
    println!("{}", format!("Provisioning {label}…").bold());

    let provisioner = UserProvisioner::new(&ctx.directory, &ctx.store);
    let report = provisioner
        .provision(roster, household_id, stores, Utc::now())
        .await;

    println!();
    println!("{}", "Credentials:".bold());
    for (index, user) in report.users.iter().enumerate() {
        let state = if user.created { "created" } else { "existing" };
        println!(
            "  {}. {} ({}) — {}",
            index + 1,
            user.name,
            user.role.label(),
            state.green()
        );
        println!("     email:    {}", user.email);
        println!("     password: {}", user.password);
        println!("     uid:      {}", user.uid);
    }
    println!();
    println!(
        "{} created {}, existing {}, errored {}",
        "summary:".bold(),
        report.created,
        report.existing,
        report.errored
    );

    if !report.is_clean() {
        bail!("{} of {} users failed to provision", report.errored, roster.len());
    }
    Ok(())
}

pub async fn repair(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Repairing placeholder profiles…".bold());

    let report = UserProvisioner::new(&ctx.directory, &ctx.store)
        .repair_placeholder_docs(Utc::now())
        .await?;

    println!(
        "{} repaired {}, skipped {} (missing)",
        "done:".green().bold(),
        report.repaired,
        report.skipped
    );
    Ok(())
}

pub async fn cleanup(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Deleting placeholder profiles…".bold());

    let removed = UserProvisioner::new(&ctx.directory, &ctx.store)
        .remove_placeholder_docs()
        .await?;

    println!("{} {} placeholder docs deleted", "done:".green().bold(), removed);
    Ok(())
}

pub async fn list(ctx: &AdminContext) -> Result<()> {
    let users = ctx.directory.list_users().await?;

    if users.is_empty() {
        println!("{}", "no accounts in the auth directory".yellow());
        return Ok(());
    }

    println!("{} {} accounts", "found:".bold(), users.len());
    for (index, user) in users.iter().enumerate() {
        println!(
            "  {}. {} — uid {} — {}",
            index + 1,
            user.email,
            user.uid,
            user.display_name.as_deref().unwrap_or("(no name)")
        );
    }

    // Machine-pasteable summary, same as the listing above.
    let summary: Vec<serde_json::Value> = users
        .iter()
        .map(|user| {
            serde_json::json!({
                "email": user.email,
                "uid": user.uid,
                "displayName": user.display_name,
            })
        })
        .collect();
    println!();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

pub async fn find_demo_uids(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Looking up demo family accounts…".bold());

    let results = UserProvisioner::new(&ctx.directory, &ctx.store)
        .lookup_all(DEMO_FAMILY)
        .await;

    let mut missing = 0;
    for (email, account) in &results {
        match account {
            Some(account) => {
                println!("  {} {email} — uid {}", "✓".green(), account.uid);
            }
            None => {
                missing += 1;
                println!("  {} {email} — not found", "✗".red());
            }
        }
    }

    if missing > 0 {
        println!(
            "{}",
            format!("{missing} accounts missing — run create-demo-family first").yellow()
        );
    }
    Ok(())
}
