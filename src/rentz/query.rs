//! # Query Engine
//!
//! Pure functions over a slice of listings. Nothing in here mutates its
//! input or holds state between calls; every operation hands back a new
//! sequence (pagination hands back a sub-slice of the one it was given).
//!
//! The layers above compose these in a fixed order: filter, then sort,
//! then paginate. Pagination always runs on the post-filter post-sort
//! view, never on the raw catalog.
//!
//! Two behaviors are deliberately permissive and must stay that way:
//! an unrecognized sort key leaves the order untouched (callers parse
//! sort keys leniently into `Option<SortOption>`), and an out-of-range
//! page yields an empty slice. Neither is an error.

use crate::model::{Property, SortOption};

/// The conjunctive filter form. Absent fields are no-ops; an empty
/// country string counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub country: Option<String>,
    pub price: Option<u32>,
    pub available_only: bool,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        !self.available_only
            && self.price.is_none()
            && self.country.as_deref().map_or(true, |c| c.is_empty())
    }
}

/// Narrows the sequence by every predicate present in `filters` (AND).
/// Country and price are exact-match. Relative order is preserved.
pub fn filter(properties: &[Property], filters: &Filters) -> Vec<Property> {
    let mut filtered: Vec<Property> = properties.to_vec();

    if let Some(country) = filters.country.as_deref() {
        if !country.is_empty() {
            filtered.retain(|p| p.location.country == country);
        }
    }

    if let Some(price) = filters.price {
        filtered.retain(|p| p.price == price);
    }

    if filters.available_only {
        filtered.retain(|p| p.is_available);
    }

    filtered
}

/// Case-insensitive substring match against title, city, and country.
/// An empty or whitespace-only term returns the full sequence; a search
/// box cleared by the user means "show everything", not "show nothing".
pub fn search(properties: &[Property], term: &str) -> Vec<Property> {
    let term = term.trim().to_lowercase();

    if term.is_empty() {
        return properties.to_vec();
    }

    properties
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&term)
                || p.location.city.to_lowercase().contains(&term)
                || p.location.country.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Copy-then-sort. `None` means no recognized ordering was requested
/// and the input order is returned unchanged.
pub fn sort(properties: &[Property], option: Option<SortOption>) -> Vec<Property> {
    let mut sorted: Vec<Property> = properties.to_vec();

    match option {
        Some(SortOption::PriceAsc) => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortOption::PriceDesc) => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortOption::NameAsc) => sorted.sort_by(|a, b| title_key(a).cmp(&title_key(b))),
        Some(SortOption::NameDesc) => sorted.sort_by(|a, b| title_key(b).cmp(&title_key(a))),
        None => {}
    }

    sorted
}

// Case-folded title, so "london" and "London" collate together.
fn title_key(p: &Property) -> String {
    p.title.to_lowercase()
}

/// The 1-based page slice `[(page-1)*k, min(page*k, len))`. Page 0 or
/// a page past the end yields an empty slice; clamping the cursor is
/// the caller's job.
pub fn paginate(properties: &[Property], page: usize, items_per_page: usize) -> &[Property] {
    if page == 0 || items_per_page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(items_per_page);
    if start >= properties.len() {
        return &[];
    }

    let end = (start + items_per_page).min(properties.len());
    &properties[start..end]
}

/// Distinct countries in first-seen order, for the country facet.
pub fn unique_countries(properties: &[Property]) -> Vec<String> {
    let mut countries: Vec<String> = Vec::new();
    for p in properties {
        if !countries.contains(&p.location.country) {
            countries.push(p.location.country.clone());
        }
    }
    countries
}

/// Distinct prices in ascending order, for the price facet.
pub fn unique_prices(properties: &[Property]) -> Vec<u32> {
    properties
        .iter()
        .map(|p| p.price)
        .collect::<std::collections::BTreeSet<u32>>()
        .into_iter()
        .collect()
}
