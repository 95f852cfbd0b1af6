//! Catalog search and filtering.
//!
//! Search is a pure function of the catalog and a [`SearchFilters`] value. It
//! never fails: filters that cannot be interpreted are dropped, so the worst
//! case is the unfiltered catalog or an empty list. Results keep catalog
//! order.
//!
//! Filters are applied in this order (all string comparisons ignore case):
//!
//! 1. free text `q`, a substring of the name, description, category or color
//! 2. `category`, exact match
//! 3. `color`, exact match
//! 4. `max_price`, inclusive upper bound
//! 5. `min_price`, inclusive lower bound

use serde::Serialize;

use crate::catalog::{Catalog, Product};

/// Raw search parameters as they arrive on a query string.
///
/// Every field is optional and kept as text; interpretation happens in
/// [`SearchFilters`]. Collecting key/value pairs keeps the first value of a
/// repeated key and skips unknown keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for SearchQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut query.q,
                "category" => &mut query.category,
                "color" => &mut query.color,
                "min_price" => &mut query.min_price,
                "max_price" => &mut query.max_price,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Which product fields free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextScope {
    /// Name, description, category and color.
    #[default]
    AllFields,
    /// Name and description only (legacy contract).
    NameAndDescription,
}

/// Interpreted search filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Lower-cased free-text needle.
    text: Option<String>,
    text_scope: TextScope,
    category: Option<String>,
    color: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl SearchFilters {
    /// Interpret a query with the full filter set.
    #[must_use]
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            text: non_empty(query.q.as_deref()).map(str::to_lowercase),
            text_scope: TextScope::AllFields,
            category: non_empty(query.category.as_deref()).map(str::to_lowercase),
            color: non_empty(query.color.as_deref()).map(str::to_lowercase),
            min_price: parse_price_bound(query.min_price.as_deref()),
            max_price: parse_price_bound(query.max_price.as_deref()),
        }
    }

    /// Interpret a query under the legacy contract: free text covers name and
    /// description only, and category/color are ignored.
    #[must_use]
    pub fn legacy(query: &SearchQuery) -> Self {
        Self {
            text_scope: TextScope::NameAndDescription,
            category: None,
            color: None,
            ..Self::from_query(query)
        }
    }

    /// Whether no filter is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.category.is_none()
            && self.color.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Whether `product` passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self
                .category
                .as_deref()
                .is_none_or(|c| product.category.as_str() == c)
            && self
                .color
                .as_deref()
                .is_none_or(|c| product.color.to_lowercase() == c)
            && self.max_price.is_none_or(|max| product.price.as_f64() <= max)
            && self.min_price.is_none_or(|min| product.price.as_f64() >= min)
    }

    fn matches_text(&self, product: &Product) -> bool {
        let Some(needle) = self.text.as_deref() else {
            return true;
        };
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(&product.name)
            || contains(&product.description)
            || (self.text_scope == TextScope::AllFields
                && (contains(product.category.as_str()) || contains(&product.color)))
    }
}

/// Products matching a search, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub results: Vec<Product>,
    pub count: usize,
}

/// Run a search against the catalog.
#[must_use]
pub fn search(catalog: &Catalog, filters: &SearchFilters) -> SearchResults {
    let results: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect();

    SearchResults {
        count: results.len(),
        results,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse a price bound, treating anything that is not a finite number as absent.
fn parse_price_bound(value: Option<&str>) -> Option<f64> {
    non_empty(value)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
