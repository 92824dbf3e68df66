//! Static menu catalog with category and text filtering.
//!
//! The menu is externally owned; the cart only reads it. Filtering happens
//! here, over the catalog itself, rather than by re-scanning rendered
//! output the way the original site widget did.

use hik_cafe_core::{MenuItem, Price, PriceError};

/// Category filter value that passes every item.
pub const ALL_CATEGORIES: &str = "all";

/// The café menu: an ordered, read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from a catalog.
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// All items, in menu order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look an item up by its (unique) name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Items in a category. [`ALL_CATEGORIES`] passes everything.
    #[must_use]
    pub fn filter_category(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| category == ALL_CATEGORIES || item.category == category)
            .collect()
    }

    /// Case-insensitive text search over name, category, and description.
    /// A blank query passes everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

/// The default Hik Café menu used by the demo front end.
///
/// # Errors
///
/// Returns a [`PriceError`] if a listed price fails to parse; with the
/// prices below that indicates a typo in this table.
pub fn default_menu() -> Result<Menu, PriceError> {
    let catalog = [
        ("Espresso", "2.75", "coffee", "Double shot, chocolate notes"),
        ("Latte", "4.50", "coffee", "Silky steamed milk over espresso"),
        ("Cappuccino", "4.25", "coffee", "Equal parts espresso, milk, foam"),
        ("Cold Brew", "5.25", "coffee", "Steeped 18 hours, served over ice"),
        ("Green Tea", "3.00", "tea", "Stone-milled sencha"),
        ("Chai Latte", "4.75", "tea", "House-spiced black tea with milk"),
        ("Croissant", "3.00", "pastry", "Laminated butter pastry"),
        ("Banana Bread", "3.50", "pastry", "Toasted, with salted butter"),
        ("Avocado Toast", "8.50", "food", "Sourdough, chili flakes, lime"),
        ("Granola Bowl", "7.25", "food", "House granola, yogurt, berries"),
    ];

    let mut items = Vec::with_capacity(catalog.len());
    for (name, price, category, description) in catalog {
        let mut item = MenuItem::new(
            name.to_owned(),
            Price::parse(price)?,
            format!("img/{}.jpg", name.to_lowercase().replace(' ', "-")),
            category.to_owned(),
        );
        item.description = Some(description.to_owned());
        items.push(item);
    }

    Ok(Menu::new(items))
}
