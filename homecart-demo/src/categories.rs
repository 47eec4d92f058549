//! App-level categories and their catalog aliases.

/// The category vocabulary the app plans demo data in. The catalog's own
/// categories come from retailer feeds in full Hebrew; each app category
/// maps onto one or more of them (many-to-one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppCategory {
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Bakery,
    DryGoods,
    Beverages,
    Snacks,
    Toiletries,
    Cleaning,
    Other,
}

impl AppCategory {
    /// The catalog category names this app category covers.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            AppCategory::Dairy => &["מוצרי חלב"],
            AppCategory::Meat => &["בשר ודגים"],
            AppCategory::Vegetables => &["ירקות"],
            AppCategory::Fruits => &["פירות"],
            AppCategory::Bakery => &["מאפים"],
            AppCategory::DryGoods => &["אורז ופסטה", "תבלינים ואפייה", "שמנים ורטבים"],
            AppCategory::Beverages => &["משקאות", "קפה ותה"],
            AppCategory::Snacks => &["ממתקים וחטיפים"],
            AppCategory::Toiletries => &["היגיינה אישית"],
            AppCategory::Cleaning => &["מוצרי ניקיון"],
            AppCategory::Other => &["אחר", "קפואים"],
        }
    }

    /// Whether a catalog category name belongs to this app category.
    pub fn matches(&self, catalog_category: &str) -> bool {
        self.aliases().contains(&catalog_category)
    }
}
