//! Schema migration commands.

use crate::context::AdminContext;
use anyhow::{bail, Result};
use colored::Colorize;
use homecart_migrate::{FieldValueMigration, ItemMigrator};
use homecart_model::collections;
use serde_json::json;

pub async fn items(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Migrating list items to the unified shape…".bold());

    let report = ItemMigrator::new(&ctx.store, collections::SHOPPING_LISTS)
        .run()
        .await?;

    println!();
    println!("{}", "Lists:".bold());
    println!("  scanned:   {}", report.lists);
    println!("  updated:   {}", report.updated);
    println!("  unchanged: {}", report.unchanged);
    println!("  failed:    {}", report.failed);
    println!("{}", "Items:".bold());
    println!("  total:     {}", report.items.total);
    println!("  migrated:  {}", report.items.migrated);
    println!("  skipped:   {}", report.items.skipped);

    if !report.is_clean() {
        bail!("{} lists could not be migrated", report.failed);
    }
    if report.items.migrated == 0 {
        println!("{}", "nothing to migrate — all items already unified".green());
    } else {
        println!(
            "{} {} items migrated",
            "done:".green().bold(),
            report.items.migrated
        );
    }
    Ok(())
}

pub async fn list_types(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Renaming list type \"super\" → \"supermarket\"…".bold());

    let report = FieldValueMigration::new(
        &ctx.store,
        collections::SHOPPING_LISTS,
        "type",
        json!("super"),
        json!("supermarket"),
    )
    .run()
    .await?;

    if report.matched == 0 {
        println!("{}", "no lists left on the old type".green());
    } else {
        println!(
            "{} {} lists renamed in {} commit(s)",
            "done:".green().bold(),
            report.updated,
            report.chunks
        );
    }
    Ok(())
}
