//! Demo-data synthesis and seeding for the Homecart collections.
//!
//! Everything demo-shaped lives here: the system-template table, the demo
//! account rosters, the category→count plans, and the [`Synthesizer`] that
//! turns the real product catalog into randomized but structurally valid
//! lists, receipts and inventory.
//!
//! Randomness is injected (`R: Rng`) so fixtures can seed it; production
//! call sites use `StdRng::from_entropy()`.

mod catalog;
mod categories;
mod error;
mod generate;
mod plans;
mod synth;
mod templates;
mod users;

pub use catalog::{fallback_catalog, load_catalog, load_catalog_strict, CATALOG_SCAN_LIMIT};
pub use categories::AppCategory;
pub use error::{DemoError, DemoResult};
pub use generate::{
    generate_family_environment, generate_structured_environment, DemoEnvironment,
};
pub use plans::{InventoryPlan, ListPlan, ReceiptPlan, DEMO_LISTS, DEMO_RECEIPTS, INVENTORY_PLANS};
pub use synth::Synthesizer;
pub use templates::{seed_templates, system_templates};
pub use users::{
    DemoUser, FamilyRole, ProvisionReport, ProvisionedUser, RepairReport, UserProvisioner,
    DEMO_FAMILY, DEMO_HOUSEHOLD_ID, DEMO_STORES, DEMO_USERS, FAMILY_HOUSEHOLD_ID, FAMILY_STORES,
    LEGACY_PLACEHOLDER_IDS,
};
