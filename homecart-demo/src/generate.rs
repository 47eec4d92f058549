//! Full demo-environment generation.
//!
//! Two variants, matching the two ways demos get built:
//!
//! - [`generate_family_environment`] — the rich five-person household:
//!   provisions accounts, then synthesizes a month of lists, receipts and
//!   pantry contents from the catalog (falling back to the embedded one).
//! - [`generate_structured_environment`] — the plan-driven variant for a
//!   single existing user, which insists on real uploaded products.

use crate::catalog::{load_catalog, load_catalog_strict};
use crate::error::DemoResult;
use crate::plans::{DEMO_LISTS, DEMO_RECEIPTS, INVENTORY_PLANS};
use crate::synth::Synthesizer;
use crate::users::{UserProvisioner, DEMO_FAMILY, FAMILY_HOUSEHOLD_ID, FAMILY_STORES};
use chrono::{DateTime, Utc};
use homecart_model::{collections, Template};
use homecart_store::{AuthDirectory, BatchWriter, DocumentStore, WriteOp};
use rand::Rng;
use serde_json::json;
use tracing::{info, warn};

const RECEIPT_STORES: &[&str] = &["שופרסל", "רמי לוי", "פארם", "סופר פארם", "יינות ביתן"];
const FAMILY_RECEIPT_COUNT: usize = 20;
const FAMILY_INVENTORY_COUNT: usize = 30;
const FAVORITE_PRODUCT_COUNT: usize = 5;

/// Counts of what a generation run wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoEnvironment {
    pub users: usize,
    pub lists: usize,
    pub receipts: usize,
    pub inventory_items: usize,
    pub catalog_size: usize,
    pub errored: usize,
}

impl DemoEnvironment {
    pub fn is_clean(&self) -> bool {
        self.errored == 0
    }
}

/// Builds the five-person family demo: accounts, profiles, lists seeded
/// from the system templates, four weeks of grocery history, receipts and
/// pantry inventory.
pub async fn generate_family_environment<R: Rng>(
    store: &dyn DocumentStore,
    directory: &dyn AuthDirectory,
    rng: R,
    now: DateTime<Utc>,
) -> DemoResult<DemoEnvironment> {
    let catalog = load_catalog(store).await;
    let mut synth = Synthesizer::new(catalog, rng);
    let mut env = DemoEnvironment {
        catalog_size: synth.products().len(),
        ..DemoEnvironment::default()
    };

    // Existing system templates drive the first few lists.
    let templates: Vec<Template> = store
        .query_eq(collections::TEMPLATES, "is_system", &json!(true))
        .await?
        .iter()
        .filter_map(|doc| doc.parse::<Template>().ok())
        .collect();
    info!(templates = templates.len(), "system templates loaded");

    let provisioner = UserProvisioner::new(directory, store);
    let report = provisioner
        .provision(DEMO_FAMILY, FAMILY_HOUSEHOLD_ID, FAMILY_STORES, now)
        .await;
    env.users = report.users.len();
    env.errored += report.errored;

    if report.users.is_empty() {
        warn!("no family members provisioned, skipping data generation");
        return Ok(env);
    }

    // Each member favorites a few products from the catalog.
    for user in &report.users {
        let favorites: Vec<String> = synth
            .sample_any(FAVORITE_PRODUCT_COUNT)
            .iter()
            .map(|product| product.barcode.clone())
            .collect();
        store
            .commit(&[WriteOp::set_merged(
                collections::USERS,
                &user.uid,
                json!({ "favorite_products": favorites }),
            )])
            .await?;
    }

    let writer = BatchWriter::new(store);

    // Lists: a few from templates, four weekly runs, one active list.
    let mut list_writes = Vec::new();
    for template in templates.iter().take(3) {
        let creator = pick_uid(&mut synth, &report.users);
        let list = synth.list_from_template(template, FAMILY_HOUSEHOLD_ID, &creator, now);
        list_writes.push(WriteOp::set(
            collections::SHOPPING_LISTS,
            &list.id,
            serde_json::to_value(&list)?,
        ));
    }
    for weeks_back in 0..4 {
        let creator = pick_uid(&mut synth, &report.users);
        let list = synth.weekly_list(weeks_back, FAMILY_HOUSEHOLD_ID, &creator, now);
        list_writes.push(WriteOp::set(
            collections::SHOPPING_LISTS,
            &list.id,
            serde_json::to_value(&list)?,
        ));
    }
    let urgent = synth.urgent_list(FAMILY_HOUSEHOLD_ID, &report.users[0].uid, now);
    list_writes.push(WriteOp::set(
        collections::SHOPPING_LISTS,
        &urgent.id,
        serde_json::to_value(&urgent)?,
    ));
    env.lists = list_writes.len();
    writer.write_all(list_writes).await?;

    // A month of receipts.
    let mut receipt_writes = Vec::new();
    for _ in 0..FAMILY_RECEIPT_COUNT {
        let store_name = synth.pick(RECEIPT_STORES).copied().unwrap_or("שופרסל");
        let buyer = pick_uid(&mut synth, &report.users);
        let receipt = synth.random_receipt(store_name, FAMILY_HOUSEHOLD_ID, &buyer, now);
        receipt_writes.push(WriteOp::set(
            collections::RECEIPTS,
            &receipt.id,
            serde_json::to_value(&receipt)?,
        ));
    }
    env.receipts = receipt_writes.len();
    writer.write_all(receipt_writes).await?;

    // Pantry contents.
    let count = FAMILY_INVENTORY_COUNT.min(synth.products().len());
    let added_by = report.users[0].uid.clone();
    let mut inventory_writes = Vec::new();
    for item in synth.random_inventory(count, FAMILY_HOUSEHOLD_ID, &added_by, now) {
        inventory_writes.push(WriteOp::set(
            collections::INVENTORY,
            &item.id,
            serde_json::to_value(&item)?,
        ));
    }
    env.inventory_items = inventory_writes.len();
    writer.write_all(inventory_writes).await?;

    info!(
        users = env.users,
        lists = env.lists,
        receipts = env.receipts,
        inventory = env.inventory_items,
        "family demo environment generated"
    );
    Ok(env)
}

/// Builds the structured single-user demo from the category→count plans.
/// Requires a non-empty product catalog — this variant exists to showcase
/// real uploaded products.
pub async fn generate_structured_environment<R: Rng>(
    store: &dyn DocumentStore,
    rng: R,
    household_id: &str,
    user_id: &str,
    now: DateTime<Utc>,
) -> DemoResult<DemoEnvironment> {
    let catalog = load_catalog_strict(store).await?;
    let mut synth = Synthesizer::new(catalog, rng);
    let mut env = DemoEnvironment {
        catalog_size: synth.products().len(),
        ..DemoEnvironment::default()
    };

    let writer = BatchWriter::new(store);
    let mut writes = Vec::new();

    for plan in DEMO_LISTS {
        let list = synth.build_list(plan, household_id, user_id, now);
        writes.push(WriteOp::set(
            collections::SHOPPING_LISTS,
            &list.id,
            serde_json::to_value(&list)?,
        ));
        env.lists += 1;
    }

    for plan in INVENTORY_PLANS {
        for item in synth.build_inventory(plan, household_id, user_id, now) {
            writes.push(WriteOp::set(
                collections::INVENTORY,
                &item.id,
                serde_json::to_value(&item)?,
            ));
            env.inventory_items += 1;
        }
    }

    for plan in DEMO_RECEIPTS {
        let receipt = synth.build_receipt(plan, household_id, user_id, now);
        writes.push(WriteOp::set(
            collections::RECEIPTS,
            &receipt.id,
            serde_json::to_value(&receipt)?,
        ));
        env.receipts += 1;
    }

    writer.write_all(writes).await?;
    info!(
        lists = env.lists,
        receipts = env.receipts,
        inventory = env.inventory_items,
        "structured demo data generated"
    );
    Ok(env)
}

fn pick_uid<R: Rng>(
    synth: &mut Synthesizer<R>,
    users: &[crate::users::ProvisionedUser],
) -> String {
    synth
        .pick(users)
        .map(|user| user.uid.clone())
        .unwrap_or_default()
}
