//! `delete-lists` — remove every list of one household.

use crate::context::AdminContext;
use anyhow::Result;
use colored::Colorize;
use homecart_model::collections;
use homecart_store::{BatchWriter, DocumentStore, WriteOp};
use serde_json::json;

pub async fn delete(ctx: &AdminContext, household: &str) -> Result<()> {
    println!("{}", format!("Deleting lists of household {household}…").bold());

    let docs = ctx
        .store
        .query_eq(collections::SHOPPING_LISTS, "household_id", &json!(household))
        .await?;

    if docs.is_empty() {
        println!("{}", "no lists to delete".yellow());
        return Ok(());
    }

    let writes: Vec<WriteOp> = docs
        .iter()
        .map(|doc| {
            let name = doc
                .data
                .get("name")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("(unnamed)");
            println!("  {} {} ({})", "✗".red(), name, doc.id);
            WriteOp::delete(collections::SHOPPING_LISTS, &doc.id)
        })
        .collect();

    let report = BatchWriter::new(&ctx.store).write_all(writes).await?;
    println!(
        "{} {} lists deleted in {} commit(s)",
        "done:".green().bold(),
        report.written,
        report.chunks
    );
    Ok(())
}
