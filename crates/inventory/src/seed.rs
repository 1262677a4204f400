//! Built-in starter inventory.

use crate::item::{Item, ItemId};

/// (id, name, price, stock, category) rows for the starter collection.
const STARTER_ROWS: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "Rice (Basmati)", "Rs. 20", "50 kg", "Grains"),
    ("2", "Sugar", "Rs. 5", "100 kg", "Essentials"),
    ("3", "Cooking Oil", "Rs. 15", "30 L", "Essentials"),
    ("4", "Wheat Flour", "Rs. 10", "80 kg", "Grains"),
    ("5", "Salt", "Rs. 1", "200 pkts", "Essentials"),
    ("6", "Tea Leaves", "Rs. 8", "40 boxes", "Beverages"),
    ("7", "Milk (UHT)", "Rs. 2", "60 L", "Dairy"),
    ("8", "Eggs", "Rs. 4", "30 doz", "Dairy"),
    ("9", "Bread", "Rs. 3", "20 loaves", "Bakery"),
    ("10", "Butter", "Rs. 6", "15 kg", "Dairy"),
    ("11", "Lentils (Masoor)", "Rs. 4", "40 kg", "Grains"),
    ("12", "Chickpeas", "Rs. 3", "35 kg", "Grains"),
    ("13", "Spices Mix", "Rs. 5", "50 pkts", "Spices"),
    ("14", "Dish Soap", "Rs. 3", "25 bottles", "Household"),
    ("15", "Laundry Detergent", "Rs. 12", "20 bags", "Household"),
    ("16", "Toothpaste", "Rs. 4", "40 tubes", "Personal Care"),
    ("17", "Shampoo", "Rs. 8", "15 bottles", "Personal Care"),
    ("18", "Soap Bar", "Rs. 1", "100 bars", "Personal Care"),
    ("19", "Biscuits", "Rs. 2", "60 pkts", "Snacks"),
    ("20", "Juice", "Rs. 5", "30 L", "Beverages"),
];

/// The collection a fresh store is seeded with on first load.
pub fn starter_items() -> Vec<Item> {
    STARTER_ROWS
        .iter()
        .map(|(id, name, price, stock, category)| Item {
            id: ItemId::from(*id),
            name: (*name).to_string(),
            price: (*price).to_string(),
            stock: (*stock).to_string(),
            category: (*category).to_string(),
        })
        .collect()
}
