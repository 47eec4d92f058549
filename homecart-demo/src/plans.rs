//! Structural plans for the demo environment: which records to build and
//! how many items of each category they get. Products themselves always
//! come from the catalog.

use crate::categories::AppCategory;
use homecart_model::ListStatus;

/// Plan for one shopping list.
#[derive(Clone, Copy, Debug)]
pub struct ListPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub list_type: &'static str,
    pub status: ListStatus,
    pub category_counts: &'static [(AppCategory, usize)],
}

/// Plan for one receipt.
#[derive(Clone, Copy, Debug)]
pub struct ReceiptPlan {
    pub id: &'static str,
    pub store_name: &'static str,
    pub days_ago: i64,
    pub category_counts: &'static [(AppCategory, usize)],
}

/// Plan for one inventory location.
#[derive(Clone, Copy, Debug)]
pub struct InventoryPlan {
    pub location: &'static str,
    pub category: AppCategory,
    pub count: usize,
    pub min_quantity: u32,
}

pub const DEMO_LISTS: &[ListPlan] = &[
    ListPlan {
        id: "list_weekly_groceries",
        name: "קניות שבועיות",
        list_type: "supermarket",
        status: ListStatus::Active,
        category_counts: &[
            (AppCategory::Dairy, 3),
            (AppCategory::Meat, 2),
            (AppCategory::Vegetables, 3),
            (AppCategory::Fruits, 2),
            (AppCategory::Bakery, 2),
            (AppCategory::DryGoods, 2),
        ],
    },
    ListPlan {
        id: "list_party_supplies",
        name: "יום הולדת לילדים",
        list_type: "event_birthday",
        status: ListStatus::Active,
        category_counts: &[
            (AppCategory::Snacks, 3),
            (AppCategory::Beverages, 2),
            (AppCategory::Bakery, 1),
        ],
    },
    ListPlan {
        id: "list_pharmacy_completed",
        name: "ביקור בסופר פארם",
        list_type: "pharmacy",
        status: ListStatus::Completed,
        category_counts: &[(AppCategory::Toiletries, 2), (AppCategory::Cleaning, 1)],
    },
];

pub const DEMO_RECEIPTS: &[ReceiptPlan] = &[
    ReceiptPlan {
        id: "receipt_shufersal_recent",
        store_name: "שופרסל",
        days_ago: 3,
        category_counts: &[
            (AppCategory::Dairy, 4),
            (AppCategory::Bakery, 2),
            (AppCategory::Vegetables, 3),
            (AppCategory::DryGoods, 4),
            (AppCategory::Beverages, 2),
        ],
    },
    ReceiptPlan {
        id: "receipt_ramilevy_recent",
        store_name: "רמי לוי",
        days_ago: 7,
        category_counts: &[
            (AppCategory::Dairy, 3),
            (AppCategory::Bakery, 1),
            (AppCategory::Vegetables, 4),
            (AppCategory::DryGoods, 3),
        ],
    },
];

pub const INVENTORY_PLANS: &[InventoryPlan] = &[
    InventoryPlan {
        location: "מזווה",
        category: AppCategory::DryGoods,
        count: 8,
        min_quantity: 2,
    },
    InventoryPlan {
        location: "מקרר",
        category: AppCategory::Dairy,
        count: 3,
        min_quantity: 1,
    },
    InventoryPlan {
        location: "מטבח",
        category: AppCategory::Cleaning,
        count: 2,
        min_quantity: 1,
    },
    InventoryPlan {
        location: "שירותים",
        category: AppCategory::Toiletries,
        count: 2,
        min_quantity: 1,
    },
];
