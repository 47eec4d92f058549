//! `upload-products` — push a products JSON file into the catalog.

use crate::context::AdminContext;
use anyhow::{Context, Result};
use colored::Colorize;
use homecart_model::{collections, Product};
use homecart_store::{BatchWriter, WriteOp};
use std::path::Path;

pub async fn upload(ctx: &AdminContext, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read products file {}", file.display()))?;
    let products: Vec<Product> =
        serde_json::from_str(&raw).context("products file is not a JSON array of products")?;

    println!("{} {} products found", "→".cyan(), products.len());

    let writes = products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            // Rows without a barcode still get a stable-enough id within
            // one file, matching how the catalog was first uploaded.
            let doc_id = if product.barcode.is_empty() {
                format!("product_{index}")
            } else {
                product.barcode.clone()
            };
            Ok(WriteOp::set(
                collections::PRODUCTS,
                doc_id,
                serde_json::to_value(product)?,
            )
            .with_server_stamp("lastUpdate"))
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    let report = BatchWriter::new(&ctx.store)
        .write_all_with(writes, |done, total| {
            println!("  {} uploaded {done} / {total}…", "→".cyan());
        })
        .await?;

    println!(
        "{} {} products uploaded in {} commit(s)",
        "done:".green().bold(),
        report.written,
        report.chunks
    );
    Ok(())
}
