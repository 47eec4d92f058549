//! Product catalog loading, with an embedded fallback.

use crate::error::{DemoError, DemoResult};
use homecart_model::{collections, Product};
use homecart_store::DocumentStore;
use tracing::{debug, warn};

/// How many catalog documents one run reads at most.
pub const CATALOG_SCAN_LIMIT: usize = 1000;

/// Loads the real product catalog. If the collection is empty, unreachable
/// or unparseable, falls back to the embedded catalog so demo generation
/// never hard-fails on missing upstream data.
pub async fn load_catalog(store: &dyn DocumentStore) -> Vec<Product> {
    match load_catalog_strict(store).await {
        Ok(products) => products,
        Err(err) => {
            warn!(%err, "falling back to the embedded catalog");
            fallback_catalog()
        }
    }
}

/// Loads the real product catalog, erroring when it is empty. The
/// structured demo-data generator wants real uploaded products by design.
pub async fn load_catalog_strict(store: &dyn DocumentStore) -> DemoResult<Vec<Product>> {
    let docs = store.list(collections::PRODUCTS, CATALOG_SCAN_LIMIT).await?;
    let mut products = Vec::with_capacity(docs.len());
    for doc in &docs {
        match doc.parse::<Product>() {
            Ok(mut product) => {
                if product.barcode.is_empty() {
                    product.barcode = doc.id.clone();
                }
                products.push(product);
            }
            Err(err) => debug!(id = %doc.id, %err, "skipping unparseable catalog row"),
        }
    }

    if products.is_empty() {
        return Err(DemoError::EmptyCatalog);
    }
    debug!(count = products.len(), "catalog loaded");
    Ok(products)
}

fn product(barcode: &str, name: &str, category: &str, price: f64, brand: &str, unit: &str) -> Product {
    Product {
        barcode: barcode.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        brand: Some(brand.to_string()),
        unit: unit.to_string(),
        price,
        store: None,
    }
}

/// The embedded catalog: enough real-looking products to cover every app
/// category when the `products` collection has not been uploaded yet.
pub fn fallback_catalog() -> Vec<Product> {
    vec![
        product("7290000000001", "חלב 3% 1 ליטר", "מוצרי חלב", 6.5, "תנובה", "יח׳"),
        product("7290000000002", "גבינה צהובה 28%", "מוצרי חלב", 24.9, "תנובה", "יח׳"),
        product("7290000000003", "קוטג' 5%", "מוצרי חלב", 6.2, "תנובה", "יח׳"),
        product("7290000000004", "יוגורט טבעי", "מוצרי חלב", 4.9, "יופלה", "יח׳"),
        product("7290000000005", "חמאה 200 גרם", "מוצרי חלב", 12.9, "תנובה", "יח׳"),
        product("7290000000006", "לחם פרוס", "מאפים", 8.9, "אנג'ל", "יח׳"),
        product("7290000000007", "חלה", "מאפים", 11.9, "אנג'ל", "יח׳"),
        product("7290000000008", "עגבניות", "ירקות", 5.9, "טרי", "ק\"ג"),
        product("7290000000009", "מלפפונים", "ירקות", 4.5, "טרי", "ק\"ג"),
        product("7290000000010", "תפוחי אדמה", "ירקות", 3.9, "טרי", "ק\"ג"),
        product("7290000000011", "בננות", "פירות", 6.9, "טרי", "ק\"ג"),
        product("7290000000012", "תפוחים", "פירות", 7.9, "טרי", "ק\"ג"),
        product("7290000000013", "חזה עוף טרי", "בשר ודגים", 39.9, "עוף טוב", "ק\"ג"),
        product("7290000000014", "אורז לבן", "אורז ופסטה", 12.9, "סוגת", "יח׳"),
        product("7290000000015", "פסטה פנה", "אורז ופסטה", 7.5, "אסם", "יח׳"),
        product("7290000000016", "שמן זית כתית", "שמנים ורטבים", 24.9, "עין זית", "יח׳"),
        product("7290000000017", "קמח לבן", "תבלינים ואפייה", 8.9, "רקיק", "יח׳"),
        product("7290000000018", "קולה 1.5 ליטר", "משקאות", 5.9, "קוקה קולה", "יח׳"),
        product("7290000000019", "מיץ תפוזים", "משקאות", 8.9, "פריגת", "יח׳"),
        product("7290000000020", "קפה נמס", "קפה ותה", 22.9, "עלית", "יח׳"),
        product("7290000000021", "במבה", "ממתקים וחטיפים", 4.9, "אסם", "יח׳"),
        product("7290000000022", "שוקולד מריר", "ממתקים וחטיפים", 6.9, "עלית", "יח׳"),
        product("7290000000023", "משחת שיניים", "היגיינה אישית", 9.9, "קולגייט", "יח׳"),
        product("7290000000024", "שמפו", "היגיינה אישית", 14.9, "פינוק", "יח׳"),
        product("7290000000025", "נוזל כלים", "מוצרי ניקיון", 8.9, "פיירי", "יח׳"),
        product("7290000000026", "אקונומיקה", "מוצרי ניקיון", 6.5, "סנו", "יח׳"),
        product("7290000000027", "פיצה קפואה", "קפואים", 18.9, "זוגלובק", "יח׳"),
        product("7290000000028", "ביצים L", "אחר", 12.9, "מעוף", "מארז"),
    ]
}
