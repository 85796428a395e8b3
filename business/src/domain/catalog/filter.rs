use std::collections::BTreeSet;

use crate::domain::product::model::Product;

/// Case-insensitive substring match against name, description and brand.
/// An empty term matches every product.
pub fn matches_text(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&product.name, &product.description, &product.brand]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_by_text<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches_text(p, term)).collect()
}

/// Distinct categories of a collection, sorted.
pub fn distinct_categories(products: &[Product]) -> BTreeSet<String> {
    products.iter().map(|p| p.category.clone()).collect()
}
