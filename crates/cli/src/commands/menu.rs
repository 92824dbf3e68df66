//! `menu` command: browse the café catalog.

use hik_cafe_cart::{ALL_CATEGORIES, default_menu};
use hik_cafe_core::MenuItem;

/// List menu items, optionally filtered by category and text search.
///
/// # Errors
///
/// Returns an error if the built-in catalog fails to parse, which would be
/// a typo in the catalog table itself.
#[allow(clippy::print_stdout)]
pub fn list(
    category: Option<&str>,
    search: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let menu = default_menu()?;

    let hits = menu.search(search.unwrap_or_default());
    let items: Vec<&MenuItem> = menu
        .filter_category(category.unwrap_or(ALL_CATEGORIES))
        .into_iter()
        .filter(|item| hits.iter().any(|hit| hit.name == item.name))
        .collect();

    if items.is_empty() {
        println!("No menu items match.");
        return Ok(());
    }

    for item in items {
        let description = item.description.as_deref().unwrap_or("");
        println!(
            "{:<14} {:>7}  [{}]  {description}",
            item.name,
            item.price.display(),
            item.category,
        );
    }

    Ok(())
}
