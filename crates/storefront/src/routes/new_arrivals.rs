//! New arrivals listing.
//!
//! Category chips and the sort menu are plain links and a GET form, so the
//! page works without JavaScript. The client script re-requests the same
//! URL with `HX-Request: true` and swaps in only the product grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use sayura_core::Product;
use sayura_core::catalog::{CategoryFilter, SortKey, category_options, filter_and_sort};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::sanity::ImageUrlBuilder;
use crate::state::AppState;
use crate::views::{LayoutView, ProductCardView};

/// Featured products shown above the grid.
const SHOWCASE_SIZE: usize = 3;

/// Products before the seasonal banner; the banner only shows when more follow.
const BANNER_AFTER: usize = 8;

const PATH: &str = "/new-arrivals";

#[derive(Debug, Default, Deserialize)]
pub struct NewArrivalsQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Listing URL for a filter and sort, omitting defaults.
fn listing_href(filter: &CategoryFilter, sort: SortKey) -> String {
    let mut params = Vec::new();
    if let CategoryFilter::Named(name) = filter {
        params.push(format!("category={}", urlencoding::encode(name)));
    }
    if sort != SortKey::default() {
        params.push(format!("sort={}", sort.key()));
    }

    if params.is_empty() {
        PATH.to_string()
    } else {
        format!("{PATH}?{}", params.join("&"))
    }
}

/// A category filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// An entry of the sort menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionView {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The filtered and sorted product grid, split around the seasonal banner.
#[derive(Debug, Clone)]
pub struct GridView {
    pub lead: Vec<ProductCardView>,
    pub rest: Vec<ProductCardView>,
    /// Category name when a filter is active.
    pub category: Option<String>,
}

impl GridView {
    #[must_use]
    pub fn total(&self) -> usize {
        self.lead.len() + self.rest.len()
    }

    fn new(
        images: &ImageUrlBuilder,
        products: &[Product],
        filter: &CategoryFilter,
        sort: SortKey,
    ) -> Self {
        let mut lead = ProductCardView::list(images, &filter_and_sort(products, filter, sort));
        let rest = lead.split_off(lead.len().min(BANNER_AFTER));
        Self {
            lead,
            rest,
            category: match filter {
                CategoryFilter::All => None,
                CategoryFilter::Named(name) => Some(name.clone()),
            },
        }
    }
}

/// Grid fragment for in-page filtering.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/product_grid.html")]
pub struct ProductGridTemplate {
    pub grid: GridView,
}

/// New arrivals page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/new_arrivals.html")]
pub struct NewArrivalsTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub showcase: Vec<ProductCardView>,
    pub chips: Vec<ChipView>,
    pub sort_options: Vec<SortOptionView>,
    /// Category carried through the sort form.
    pub category_param: String,
    pub grid: GridView,
}

fn chips(products: &[Product], filter: &CategoryFilter, sort: SortKey) -> Vec<ChipView> {
    category_options(products)
        .into_iter()
        .map(|label| {
            let chip = CategoryFilter::from_query(Some(&label));
            ChipView {
                href: listing_href(&chip, sort),
                active: &chip == filter,
                label,
            }
        })
        .collect()
}

fn sort_options(sort: SortKey) -> Vec<SortOptionView> {
    SortKey::ALL
        .into_iter()
        .map(|key| SortOptionView {
            key: key.key(),
            label: key.label(),
            selected: key == sort,
        })
        .collect()
}

/// Display new arrivals, or just the grid for fragment requests.
#[instrument(skip(state, headers))]
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NewArrivalsQuery>,
) -> Result<Response> {
    let filter = CategoryFilter::from_query(query.category.as_deref());
    let sort = SortKey::from_query(query.sort.as_deref());
    let content = state.content();

    if super::is_fragment_request(&headers) {
        let products = content.new_arrivals().await?;
        let grid = GridView::new(state.images(), &products, &filter, sort);
        return Ok(ProductGridTemplate { grid }.into_response());
    }

    let (products, featured, settings) = tokio::try_join!(
        content.new_arrivals(),
        content.featured_products(),
        content.site_settings(),
    )?;

    let layout = super::layout_view(&state, settings.as_ref());
    let showcase: Vec<Product> = featured.into_iter().take(SHOWCASE_SIZE).collect();

    Ok(NewArrivalsTemplate {
        title: format!("New Arrivals | {}", layout.brand_name),
        description: format!(
            "Discover the latest additions to {}'s collection of premium clothing.",
            layout.brand_name
        ),
        showcase: ProductCardView::list(state.images(), &showcase),
        chips: chips(&products, &filter, sort),
        sort_options: sort_options(sort),
        category_param: match &filter {
            CategoryFilter::All => String::new(),
            CategoryFilter::Named(name) => name.clone(),
        },
        grid: GridView::new(state.images(), &products, &filter, sort),
        layout,
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use sayura_core::{Category, Price, RichText, Slug};

    use super::*;

    fn product(slug: &str, category: &str) -> Product {
        Product {
            id: slug.to_string(),
            name: slug.to_string(),
            slug: Slug::new(slug),
            category: Some(Category::new(category, category.to_lowercase())),
            price: Price::new(1000),
            images: vec![],
            colors: vec![],
            badges: sayura_core::Badges::default(),
            short_description: None,
            description: RichText::default(),
            craftsmanship: None,
            styling: None,
            care: None,
            date_added: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_listing_href_omits_defaults() {
        assert_eq!(listing_href(&CategoryFilter::All, SortKey::Newest), "/new-arrivals");
        assert_eq!(
            listing_href(&CategoryFilter::Named("Evening Wear".to_string()), SortKey::PriceLow),
            "/new-arrivals?category=Evening%20Wear&sort=price-low"
        );
    }

    #[test]
    fn test_chips_mark_active_category() {
        let products = [product("a", "Dresses"), product("b", "Sarees"), product("c", "Dresses")];
        let filter = CategoryFilter::Named("Sarees".to_string());
        let chips = chips(&products, &filter, SortKey::Featured);

        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["All", "Dresses", "Sarees"]);
        assert!(!chips[0].active);
        assert!(chips[2].active);
        assert_eq!(chips[0].href, "/new-arrivals?sort=featured");
    }

    #[test]
    fn test_grid_splits_after_banner_threshold() {
        let images = ImageUrlBuilder::new("testproj", "test");
        let eight: Vec<_> = (0..8).map(|i| product(&format!("p{i}"), "Sarees")).collect();
        let grid = GridView::new(&images, &eight, &CategoryFilter::All, SortKey::Newest);
        assert_eq!(grid.lead.len(), 8);
        assert!(grid.rest.is_empty());

        let eleven: Vec<_> = (0..11).map(|i| product(&format!("p{i}"), "Sarees")).collect();
        let grid = GridView::new(&images, &eleven, &CategoryFilter::All, SortKey::Newest);
        assert_eq!(grid.lead.len(), 8);
        assert_eq!(grid.rest.len(), 3);
        assert_eq!(grid.total(), 11);
    }

    #[test]
    fn test_sort_options_select_one() {
        let options = sort_options(SortKey::PriceHigh);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert_eq!(options[2].key, "price-high");
        assert!(options[2].selected);
    }
}
