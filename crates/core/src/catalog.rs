//! Filtering, sorting and related-product selection.
//!
//! All functions here are pure: they borrow the source list and return a new
//! vector, so the same input always yields the same output and the caller's
//! data is never reordered in place.

use core::fmt;
use std::str::FromStr;

use crate::types::{Product, Slug};

/// Maximum number of related products shown on a detail page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Category chip selection on listing pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a `?category=` value. Empty and `All` (any case) select everything.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case(Self::ALL_LABEL) => Self::All,
            Some(value) => Self::Named(value.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.category_name() == name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

/// Ordering applied to product grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Featured,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Newest, Self::PriceLow, Self::PriceHigh, Self::Featured];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Featured => "featured",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Featured => "Featured",
        }
    }

    /// Parse a `?sort=` value, falling back to [`SortKey::Newest`].
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.key() == s)
            .ok_or_else(|| UnknownSortKey(s.to_owned()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Filter by category, then stable-sort by `sort`.
///
/// - `Newest`: `date_added` descending, undated products last
/// - `PriceLow` / `PriceHigh`: by price
/// - `Featured`: featured products first, source order otherwise
#[must_use]
pub fn filter_and_sort(products: &[Product], filter: &CategoryFilter, sort: SortKey) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();

    match sort {
        SortKey::Newest => result.sort_by(|a, b| match (a.date_added, b.date_added) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => core::cmp::Ordering::Less,
            (None, Some(_)) => core::cmp::Ordering::Greater,
            (None, None) => core::cmp::Ordering::Equal,
        }),
        SortKey::PriceLow => result.sort_by_key(|product| product.price),
        SortKey::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Featured => result.sort_by_key(|product| !product.is_featured()),
    }

    result
}

/// Category chip labels: `All`, then each distinct category name in order of
/// first appearance.
#[must_use]
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![CategoryFilter::ALL_LABEL.to_owned()];
    for name in products.iter().map(Product::category_name) {
        if !name.is_empty() && !options.iter().any(|existing| existing == name) {
            options.push(name.to_owned());
        }
    }
    options
}

/// Products other than `exclude`, at most `limit`, in source order.
#[must_use]
pub fn select_related(products: &[Product], exclude: &Slug, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|product| &product.slug != exclude)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::{Badges, Category, Price, RichText};

    fn product(slug: &str, category: &str, price: u64, day: Option<u32>, featured: bool) -> Product {
        Product {
            id: slug.to_owned(),
            name: slug.to_owned(),
            slug: Slug::new(slug),
            category: Some(Category::new(category, category.to_lowercase())),
            price: Price::new(price),
            images: Vec::new(),
            colors: Vec::new(),
            badges: Badges {
                is_featured: featured,
                ..Badges::default()
            },
            short_description: None,
            description: RichText::default(),
            craftsmanship: None,
            styling: None,
            care: None,
            date_added: day.and_then(|d| NaiveDate::from_ymd_opt(2025, 1, d)),
            tags: Vec::new(),
        }
    }

    fn slugs(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.slug.as_str()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("a", "Dresses", 12_999, Some(10), false),
            product("b", "Sarees", 18_999, None, true),
            product("c", "Dresses", 8_999, Some(20), true),
            product("d", "Sets", 15_999, Some(5), false),
        ]
    }

    #[test]
    fn test_newest_puts_undated_last() {
        let sorted = filter_and_sort(&sample(), &CategoryFilter::All, SortKey::Newest);
        assert_eq!(slugs(&sorted), ["c", "a", "d", "b"]);
    }

    #[test]
    fn test_price_orders() {
        let low = filter_and_sort(&sample(), &CategoryFilter::All, SortKey::PriceLow);
        assert_eq!(slugs(&low), ["c", "a", "d", "b"]);
        let high = filter_and_sort(&sample(), &CategoryFilter::All, SortKey::PriceHigh);
        assert_eq!(slugs(&high), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_featured_is_stable() {
        let sorted = filter_and_sort(&sample(), &CategoryFilter::All, SortKey::Featured);
        assert_eq!(slugs(&sorted), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_category_filter() {
        let filter = CategoryFilter::from_query(Some("Dresses"));
        let sorted = filter_and_sort(&sample(), &filter, SortKey::PriceLow);
        assert_eq!(slugs(&sorted), ["c", "a"]);

        let none = filter_and_sort(&sample(), &CategoryFilter::Named("Kurtas".into()), SortKey::Newest);
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_query_parsing() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some(" ")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("Sets")).label(), "Sets");
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("price-high".parse::<SortKey>(), Ok(SortKey::PriceHigh));
        assert_eq!(
            "cheapest".parse::<SortKey>(),
            Err(UnknownSortKey("cheapest".to_owned()))
        );
        assert_eq!(SortKey::from_query(Some("cheapest")), SortKey::Newest);
        assert_eq!(SortKey::from_query(None), SortKey::Newest);
        assert_eq!(SortKey::Featured.to_string(), "featured");
    }

    #[test]
    fn test_category_options() {
        assert_eq!(category_options(&sample()), ["All", "Dresses", "Sarees", "Sets"]);
        assert_eq!(category_options(&[]), ["All"]);
    }

    #[test]
    fn test_select_related() {
        let mut products = sample();
        products.push(product("e", "Dresses", 1, None, false));
        products.push(product("f", "Dresses", 1, None, false));

        let related = select_related(&products, &Slug::new("a"), RELATED_PRODUCTS_LIMIT);
        assert_eq!(slugs(&related), ["b", "c", "d", "e"]);

        let related = select_related(&products[..1], &Slug::new("a"), RELATED_PRODUCTS_LIMIT);
        assert!(related.is_empty());
    }
}
