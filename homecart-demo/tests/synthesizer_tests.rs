use chrono::{TimeZone, Utc};
use homecart_demo::{
    fallback_catalog, load_catalog, load_catalog_strict, AppCategory, DemoError, ListPlan,
    Synthesizer, DEMO_LISTS, DEMO_RECEIPTS,
};
use homecart_model::{ListItem, ListStatus, Product};
use homecart_store::MemoryStore;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn synth(seed: u64) -> Synthesizer<StdRng> {
    Synthesizer::new(fallback_catalog(), StdRng::seed_from_u64(seed))
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 11, 12, 0, 0).unwrap()
}

fn dairy_product(n: usize) -> Product {
    Product {
        barcode: format!("729{n:010}"),
        name: format!("מוצר חלב {n}"),
        category: "מוצרי חלב".to_string(),
        brand: None,
        unit: "יח׳".to_string(),
        price: 5.0,
        store: None,
    }
}

#[test]
fn sampling_is_capped_by_available_matches() {
    let mut synth = synth(1);
    let dairy_available = fallback_catalog()
        .iter()
        .filter(|product| AppCategory::Dairy.matches(&product.category))
        .count();

    let sampled = synth.sample_category(AppCategory::Dairy, 50);
    assert_eq!(sampled.len(), dairy_available);
}

#[test]
fn sampled_products_are_distinct_and_alias_matched() {
    let mut synth = synth(2);
    let sampled = synth.sample_category(AppCategory::DryGoods, 3);
    assert_eq!(sampled.len(), 3);

    let mut barcodes: Vec<&str> = sampled.iter().map(|p| p.barcode.as_str()).collect();
    barcodes.sort_unstable();
    barcodes.dedup();
    assert_eq!(barcodes.len(), 3);

    for product in &sampled {
        assert!(AppCategory::DryGoods.matches(&product.category));
    }
}

#[test]
fn unsellable_products_are_never_sampled() {
    let mut catalog = vec![dairy_product(1), dairy_product(2)];
    catalog[0].price = 0.0; // unpriced
    catalog.push(Product {
        name: "   ".to_string(),
        ..dairy_product(3)
    });

    let mut synth = Synthesizer::new(catalog, StdRng::seed_from_u64(3));
    let sampled = synth.sample_category(AppCategory::Dairy, 10);
    assert_eq!(sampled.len(), 1);
    assert_eq!(sampled[0].barcode, dairy_product(2).barcode);
}

#[test]
fn item_quantities_stay_in_range() {
    let mut synth = synth(4);
    let product = dairy_product(1);
    for _ in 0..200 {
        let item = synth.product_item(&product);
        let data = item.product_data().unwrap();
        assert!((1.0..=3.0).contains(&data.quantity));
        assert_eq!(data.unit_price, 5.0);
    }
}

#[test]
fn built_list_follows_its_plan() {
    let mut synth = synth(5);
    let plan: &ListPlan = &DEMO_LISTS[0];
    let list = synth.build_list(plan, "house_demo", "uid_demo", now());

    let expected: usize = plan
        .category_counts
        .iter()
        .map(|(category, count)| {
            let available = fallback_catalog()
                .iter()
                .filter(|product| product.is_sellable() && category.matches(&product.category))
                .count();
            available.min(*count)
        })
        .sum();

    assert_eq!(list.items.len(), expected);
    assert_eq!(list.status, ListStatus::Active);
    assert_eq!(list.household_id, "house_demo");
    assert!(list.items.iter().all(ListItem::is_unified));
}

#[test]
fn receipt_totals_add_up() {
    let mut synth = synth(6);
    let receipt = synth.build_receipt(&DEMO_RECEIPTS[0], "house_demo", "uid_demo", now());

    for item in &receipt.items {
        let expected = (item.price * f64::from(item.quantity) * 100.0).round() / 100.0;
        assert_eq!(item.total, expected);
        assert!((1..=3).contains(&item.quantity));
    }
    let expected_total =
        (receipt.items.iter().map(|item| item.total).sum::<f64>() * 100.0).round() / 100.0;
    assert_eq!(receipt.total, expected_total);
    assert!(receipt.date < now());
}

#[tokio::test]
async fn empty_collection_triggers_the_fallback() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store).await;
    assert_eq!(catalog.len(), fallback_catalog().len());
}

#[tokio::test]
async fn strict_loading_errors_on_an_empty_collection() {
    let store = MemoryStore::new();
    let err = load_catalog_strict(&store).await.unwrap_err();
    assert!(matches!(err, DemoError::EmptyCatalog));
}

#[tokio::test]
async fn uploaded_products_win_over_the_fallback() {
    let store = MemoryStore::new();
    for n in 0..3 {
        let product = dairy_product(n);
        store.insert_doc(
            "products",
            &product.barcode.clone(),
            serde_json::to_value(&product).unwrap(),
        );
    }

    let catalog = load_catalog(&store).await;
    assert_eq!(catalog.len(), 3);
    assert!(catalog.iter().all(|p| p.category == "מוצרי חלב"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sample_size_is_min_of_count_and_matches(available in 0usize..40, requested in 0usize..60) {
        let catalog: Vec<Product> = (0..available).map(dairy_product).collect();
        let mut synth = Synthesizer::new(catalog, StdRng::seed_from_u64(7));

        let sampled = synth.sample_category(AppCategory::Dairy, requested);
        prop_assert_eq!(sampled.len(), available.min(requested));

        let mut barcodes: Vec<String> = sampled.iter().map(|p| p.barcode.clone()).collect();
        barcodes.sort_unstable();
        barcodes.dedup();
        prop_assert_eq!(barcodes.len(), sampled.len());
    }
}
