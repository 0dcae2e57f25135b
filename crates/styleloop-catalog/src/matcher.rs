//! Tag-intersection product matching.

use std::collections::HashSet;

use crate::types::{Catalog, Product};

/// How many catalog items the fallback recommendation returns.
pub const FALLBACK_COUNT: usize = 3;

/// Return every product whose style tags intersect the inferred set.
///
/// An empty inferred set, or a set that matches nothing, falls back to the
/// first [`FALLBACK_COUNT`] catalog items so the recommendation is never
/// empty for a non-empty catalog.
pub fn match_by_style_tags(catalog: &Catalog, inferred: &HashSet<String>) -> Vec<Product> {
    if inferred.is_empty() {
        return fallback(catalog);
    }

    let matched: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| p.style_tags.iter().any(|t| inferred.contains(t)))
        .cloned()
        .collect();

    if matched.is_empty() {
        return fallback(catalog);
    }
    matched
}

fn fallback(catalog: &Catalog) -> Vec<Product> {
    catalog
        .products()
        .iter()
        .take(FALLBACK_COUNT)
        .cloned()
        .collect()
}
