//! The demo-data synthesizer.

use crate::categories::AppCategory;
use crate::plans::{InventoryPlan, ListPlan, ReceiptPlan};
use chrono::{DateTime, Duration, Timelike, Utc};
use homecart_model::{
    InventoryItem, ItemPayload, ListItem, ListStatus, Product, ProductData, Receipt, ReceiptItem,
    ShoppingList, Template, UnifiedListItem,
};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Probability that a synthesized list item is already checked off.
const CHECKED_PROBABILITY: f64 = 0.3;

/// Rounds a monetary amount to two decimals.
pub(crate) fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Builds randomized demo records out of a product catalog.
///
/// Sampling is always without replacement and never errors: a category with
/// fewer matches than requested yields all its matches. The catalog itself
/// is never mutated.
pub struct Synthesizer<R: Rng> {
    products: Vec<Product>,
    rng: R,
}

impl<R: Rng> Synthesizer<R> {
    pub fn new(products: Vec<Product>, rng: R) -> Self {
        Self { products, rng }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Up to `count` distinct sellable products from one app category.
    pub fn sample_category(&mut self, category: AppCategory, count: usize) -> Vec<Product> {
        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.is_sellable() && category.matches(&product.category))
            .collect();
        matching
            .choose_multiple(&mut self.rng, count)
            .map(|product| (*product).clone())
            .collect()
    }

    /// Up to `count` distinct sellable products from the whole catalog.
    pub fn sample_any(&mut self, count: usize) -> Vec<Product> {
        let sellable: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.is_sellable())
            .collect();
        sellable
            .choose_multiple(&mut self.rng, count)
            .map(|product| (*product).clone())
            .collect()
    }

    /// A past timestamp `days_ago` back, at a random daytime hour.
    pub fn back_date(&mut self, now: DateTime<Utc>, days_ago: i64) -> DateTime<Utc> {
        let base = now - Duration::days(days_ago);
        let hour = self.rng.gen_range(8..20);
        let minute = self.rng.gen_range(0..60);
        base.with_hour(hour)
            .and_then(|date| date.with_minute(minute))
            .unwrap_or(base)
    }

    /// One element of a slice, uniformly at random.
    pub fn pick<'t, T>(&mut self, items: &'t [T]) -> Option<&'t T> {
        items.choose(&mut self.rng)
    }

    /// A unified product item with randomized quantity and checked state.
    pub fn product_item(&mut self, product: &Product) -> UnifiedListItem {
        let checked = self.rng.gen_bool(CHECKED_PROBABILITY);
        self.product_item_with(product, checked)
    }

    fn product_item_with(&mut self, product: &Product, is_checked: bool) -> UnifiedListItem {
        UnifiedListItem {
            id: Uuid::new_v4().to_string(),
            name: product.name.clone(),
            is_checked,
            category: Some(product.category.clone()),
            notes: None,
            payload: ItemPayload::Product(ProductData {
                quantity: f64::from(self.rng.gen_range(1..=3u32)),
                unit_price: product.price,
                barcode: Some(product.barcode.clone()).filter(|barcode| !barcode.is_empty()),
                unit: product.unit.clone(),
            }),
        }
    }

    /// Builds a shopping list from a category→count plan.
    pub fn build_list(
        &mut self,
        plan: &ListPlan,
        household_id: &str,
        created_by: &str,
        now: DateTime<Utc>,
    ) -> ShoppingList {
        let mut items = Vec::new();
        for (category, count) in plan.category_counts {
            for product in self.sample_category(*category, *count) {
                let item = self.product_item(&product);
                items.push(ListItem::Unified(item));
            }
        }

        ShoppingList {
            id: plan.id.to_string(),
            name: plan.name.to_string(),
            list_type: plan.list_type.to_string(),
            status: plan.status,
            household_id: household_id.to_string(),
            created_by: created_by.to_string(),
            created_date: now,
            updated_date: now,
            items,
            tags: Vec::new(),
        }
    }

    /// Builds a receipt from a category→count plan. Line totals are
    /// `price × quantity`, the receipt total their sum, both rounded.
    pub fn build_receipt(
        &mut self,
        plan: &ReceiptPlan,
        household_id: &str,
        uploaded_by: &str,
        now: DateTime<Utc>,
    ) -> Receipt {
        let mut items = Vec::new();
        for (category, count) in plan.category_counts {
            for product in self.sample_category(*category, *count) {
                let quantity = self.rng.gen_range(1..=3u32);
                items.push(ReceiptItem {
                    name: product.name.clone(),
                    price: product.price,
                    quantity,
                    total: round2(product.price * f64::from(quantity)),
                    barcode: Some(product.barcode.clone()).filter(|barcode| !barcode.is_empty()),
                    category: Some(product.category.clone()),
                });
            }
        }
        let total = round2(items.iter().map(|item| item.total).sum());

        Receipt {
            id: plan.id.to_string(),
            store_name: plan.store_name.to_string(),
            date: self.back_date(now, plan.days_ago),
            total,
            items,
            image_path: None,
            household_id: household_id.to_string(),
            uploaded_by: uploaded_by.to_string(),
            created_date: now,
        }
    }

    /// Builds a historical list out of a template's suggested items,
    /// matching each against the catalog for price and barcode.
    pub fn list_from_template(
        &mut self,
        template: &Template,
        household_id: &str,
        created_by: &str,
        now: DateTime<Utc>,
    ) -> ShoppingList {
        let days_ago = self.rng.gen_range(5..25);
        let completed = self.rng.gen_bool(0.8);
        let mut items = Vec::with_capacity(template.default_items.len());

        for suggestion in &template.default_items {
            let matched = self
                .products
                .iter()
                .find(|product| {
                    product.name == suggestion.name
                        || product.name.contains(&suggestion.name)
                        || suggestion.name.contains(&product.name)
                })
                .cloned();

            items.push(ListItem::Unified(UnifiedListItem {
                id: Uuid::new_v4().to_string(),
                name: suggestion.name.clone(),
                is_checked: self.rng.gen_bool(0.7),
                category: Some(
                    matched
                        .as_ref()
                        .map(|product| product.category.clone())
                        .unwrap_or_else(|| suggestion.category.clone()),
                ),
                notes: None,
                payload: ItemPayload::Product(ProductData {
                    quantity: suggestion.quantity,
                    unit_price: matched.as_ref().map(|product| product.price).unwrap_or(5.0),
                    barcode: matched.as_ref().map(|product| product.barcode.clone()),
                    unit: suggestion.unit.clone(),
                }),
            }));
        }

        ShoppingList {
            id: Uuid::new_v4().to_string(),
            name: template.name.clone(),
            list_type: template.template_type.clone(),
            status: if completed {
                ListStatus::Completed
            } else {
                ListStatus::Active
            },
            household_id: household_id.to_string(),
            created_by: created_by.to_string(),
            created_date: self.back_date(now, days_ago + 1),
            updated_date: self.back_date(now, days_ago),
            items,
            tags: Vec::new(),
        }
    }

    /// A fully checked-off grocery run from `weeks_back` weeks ago.
    pub fn weekly_list(
        &mut self,
        weeks_back: i64,
        household_id: &str,
        created_by: &str,
        now: DateTime<Utc>,
    ) -> ShoppingList {
        let days_ago = weeks_back * 7 + self.rng.gen_range(0..3);
        let count = self.rng.gen_range(8..=15);
        let items: Vec<ListItem> = self
            .sample_any(count)
            .into_iter()
            .map(|product| {
                let item = self.product_item_with(&product, true);
                ListItem::Unified(item)
            })
            .collect();

        ShoppingList {
            id: Uuid::new_v4().to_string(),
            name: format!("קניות שבועיות - שבוע {}", 4 - weeks_back),
            list_type: "supermarket".to_string(),
            status: ListStatus::Completed,
            household_id: household_id.to_string(),
            created_by: created_by.to_string(),
            created_date: self.back_date(now, days_ago + 1),
            updated_date: self.back_date(now, days_ago),
            items,
            tags: Vec::new(),
        }
    }

    /// The household's current short list, nothing checked yet.
    pub fn urgent_list(
        &mut self,
        household_id: &str,
        created_by: &str,
        now: DateTime<Utc>,
    ) -> ShoppingList {
        let items: Vec<ListItem> = self
            .sample_any(5)
            .into_iter()
            .map(|product| {
                let item = self.product_item_with(&product, false);
                ListItem::Unified(item)
            })
            .collect();

        ShoppingList {
            id: Uuid::new_v4().to_string(),
            name: "קניות דחופות 🔥".to_string(),
            list_type: "supermarket".to_string(),
            status: ListStatus::Active,
            household_id: household_id.to_string(),
            created_by: created_by.to_string(),
            created_date: self.back_date(now, 1),
            updated_date: now,
            items,
            tags: Vec::new(),
        }
    }

    /// A historical receipt with slight per-line price variation.
    pub fn random_receipt(
        &mut self,
        store_name: &str,
        household_id: &str,
        uploaded_by: &str,
        now: DateTime<Utc>,
    ) -> Receipt {
        let days_ago = self.rng.gen_range(0..30);
        let count = self.rng.gen_range(5..=12);
        let mut items = Vec::with_capacity(count);

        for product in self.sample_any(count) {
            let quantity = self.rng.gen_range(1..=3u32);
            let price = round2(product.price * self.rng.gen_range(0.9..1.1));
            items.push(ReceiptItem {
                name: product.name.clone(),
                price,
                quantity,
                total: round2(price * f64::from(quantity)),
                barcode: Some(product.barcode.clone()).filter(|barcode| !barcode.is_empty()),
                category: Some(product.category.clone()),
            });
        }
        let total = round2(items.iter().map(|item| item.total).sum());
        let date = self.back_date(now, days_ago);

        Receipt {
            id: Uuid::new_v4().to_string(),
            store_name: store_name.to_string(),
            date,
            total,
            items,
            image_path: None,
            household_id: household_id.to_string(),
            uploaded_by: uploaded_by.to_string(),
            created_date: date,
        }
    }

    /// Random pantry contents across the household's storage spots.
    pub fn random_inventory(
        &mut self,
        count: usize,
        household_id: &str,
        added_by: &str,
        now: DateTime<Utc>,
    ) -> Vec<InventoryItem> {
        const LOCATIONS: &[&str] = &["מקרר", "מזווה", "מקפיא", "ארון"];

        self.sample_any(count)
            .into_iter()
            .map(|product| {
                let days_until_expiry = self.rng.gen_range(5..65);
                let added_days_ago = self.rng.gen_range(0..10);
                let location = self
                    .pick(LOCATIONS)
                    .copied()
                    .unwrap_or("מזווה")
                    .to_string();
                InventoryItem {
                    id: Uuid::new_v4().to_string(),
                    name: product.name.clone(),
                    category: product.category.clone(),
                    quantity: self.rng.gen_range(1..=5),
                    unit: product.unit.clone(),
                    location,
                    min_quantity: 1,
                    expiry_date: Some(now + Duration::days(days_until_expiry)),
                    notes: (days_until_expiry < 14).then(|| "עומד להיגמר".to_string()),
                    household_id: household_id.to_string(),
                    added_by: added_by.to_string(),
                    added_date: self.back_date(now, added_days_ago),
                    updated_date: now,
                }
            })
            .collect()
    }

    /// Builds the inventory entries for one location plan.
    pub fn build_inventory(
        &mut self,
        plan: &InventoryPlan,
        household_id: &str,
        added_by: &str,
        now: DateTime<Utc>,
    ) -> Vec<InventoryItem> {
        self.sample_category(plan.category, plan.count)
            .into_iter()
            .map(|product| InventoryItem {
                id: Uuid::new_v4().to_string(),
                name: product.name.clone(),
                category: product.category.clone(),
                quantity: self.rng.gen_range(1..=5),
                unit: product.unit.clone(),
                location: plan.location.to_string(),
                min_quantity: plan.min_quantity,
                expiry_date: None,
                notes: None,
                household_id: household_id.to_string(),
                added_by: added_by.to_string(),
                added_date: now,
                updated_date: now,
            })
            .collect()
    }
}
