//! `seed-templates` — write the shared system templates.

use crate::context::AdminContext;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use homecart_demo::seed_templates;

pub async fn seed(ctx: &AdminContext) -> Result<()> {
    println!("{}", "Seeding system templates…".bold());

    let (templates, report) = seed_templates(&ctx.store, Utc::now()).await?;

    for template in &templates {
        println!(
            "  {} {:>2}. {} {} — {} items",
            "✓".green(),
            template.sort_order,
            template.icon,
            template.name,
            template.default_items.len()
        );
    }
    println!(
        "{} {} templates written in {} commit(s)",
        "done:".green().bold(),
        report.written,
        report.chunks
    );
    Ok(())
}
