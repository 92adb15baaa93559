//! Product detail route handler.
//!
//! Gallery position, lightbox, selected color and open tab live in the
//! query string, so every widget state has its own URL and renders on the
//! server.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use sayura_core::catalog::{RELATED_PRODUCTS_LIMIT, select_related};
use sayura_core::widgets::{ColorSelection, Gallery, ProductTab, swatch_for};
use sayura_core::{Product, Slug};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::sanity::ImageUrlBuilder;
use crate::state::AppState;
use crate::views::{BlockView, ImageView, LayoutView, ProductCardView, SwatchView, rich_text};

const MAIN_IMAGE_WIDTH: u32 = 1200;
const MAIN_IMAGE_HEIGHT: u32 = 1600;
const THUMB_WIDTH: u32 = 150;
const THUMB_HEIGHT: u32 = 200;
const LIGHTBOX_WIDTH: u32 = 2000;

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub color: Option<String>,
    /// Zero-based gallery index; anything unparsable shows the first image.
    pub image: Option<String>,
    pub lightbox: Option<String>,
    pub tab: Option<String>,
}

impl ProductQuery {
    fn image_index(&self) -> usize {
        self.image
            .as_deref()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    fn lightbox_open(&self) -> bool {
        matches!(self.lightbox.as_deref(), Some("1" | "true" | "open"))
    }
}

/// Widget state of a product page, rendered back into links.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PageState {
    base: String,
    color: Option<String>,
    image: usize,
    lightbox: bool,
    tab: ProductTab,
}

impl PageState {
    /// URL for this state, omitting parameters at their defaults.
    fn href(&self) -> String {
        let mut params = Vec::new();
        if let Some(color) = &self.color {
            params.push(format!("color={}", urlencoding::encode(color)));
        }
        if self.image > 0 {
            params.push(format!("image={}", self.image));
        }
        if self.lightbox {
            params.push("lightbox=1".to_string());
        }
        if self.tab != ProductTab::default() {
            params.push(format!("tab={}", self.tab.key()));
        }

        if params.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, params.join("&"))
        }
    }

    fn with_image(&self, image: usize, lightbox: bool) -> String {
        Self {
            image,
            lightbox,
            ..self.clone()
        }
        .href()
    }

    fn with_color(&self, color: &str) -> String {
        Self {
            color: Some(color.to_string()),
            ..self.clone()
        }
        .href()
    }

    fn with_tab(&self, tab: ProductTab) -> String {
        Self { tab, ..self.clone() }.href()
    }
}

/// A gallery thumbnail.
#[derive(Debug, Clone)]
pub struct ThumbView {
    pub image: ImageView,
    pub href: String,
    pub active: bool,
}

/// Image gallery with its lightbox.
#[derive(Debug, Clone)]
pub struct GalleryView {
    pub main: ImageView,
    pub full: ImageView,
    pub thumbs: Vec<ThumbView>,
    pub counter: String,
    pub has_many: bool,
    pub previous_href: String,
    pub next_href: String,
    pub open_href: String,
    pub close_href: String,
    pub lightbox_previous_href: String,
    pub lightbox_next_href: String,
    pub lightbox_open: bool,
}

impl GalleryView {
    fn new(images: &ImageUrlBuilder, product: &Product, state: &PageState) -> Option<Self> {
        let resolved: Vec<_> = product
            .images
            .iter()
            .filter(|image| !images.image(image).url().is_empty())
            .collect();

        let mut gallery = Gallery::new(resolved.len())?.select(state.image);
        if state.lightbox {
            gallery = gallery.open();
        }
        let active = resolved.get(gallery.active())?;

        let alt = |index: usize| format!("{} - Image {}", product.name, index + 1);
        let main = ImageView::resolve(
            images,
            active,
            MAIN_IMAGE_WIDTH,
            Some(MAIN_IMAGE_HEIGHT),
            &alt(gallery.active()),
        )?;
        let full = ImageView::resolve(images, active, LIGHTBOX_WIDTH, None, &alt(gallery.active()))?;

        let thumbs = resolved
            .iter()
            .enumerate()
            .filter_map(|(index, image)| {
                Some(ThumbView {
                    image: ImageView::resolve(
                        images,
                        image,
                        THUMB_WIDTH,
                        Some(THUMB_HEIGHT),
                        &alt(index),
                    )?,
                    href: state.with_image(index, false),
                    active: index == gallery.active(),
                })
            })
            .collect();

        Some(Self {
            main,
            full,
            thumbs,
            counter: format!("{} / {}", gallery.active() + 1, gallery.len()),
            has_many: gallery.len() > 1,
            previous_href: state.with_image(gallery.previous_index(), false),
            next_href: state.with_image(gallery.next_index(), false),
            open_href: state.with_image(gallery.active(), true),
            close_href: state.with_image(gallery.close().active(), false),
            lightbox_previous_href: state.with_image(gallery.previous_index(), true),
            lightbox_next_href: state.with_image(gallery.next_index(), true),
            lightbox_open: gallery.is_lightbox_open(),
        })
    }

    const fn scroll_locked(&self) -> bool {
        self.lightbox_open
    }
}

/// Color selector with the chosen swatch.
#[derive(Debug, Clone)]
pub struct ColorSelectorView {
    pub selected: String,
    pub swatches: Vec<SwatchView>,
}

impl ColorSelectorView {
    fn new(product: &Product, requested: Option<&str>, state: &PageState) -> Option<Self> {
        let selection = ColorSelection::new(&product.colors, requested)?;
        let swatches = selection
            .colors()
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let swatch = swatch_for(color);
                SwatchView {
                    name: color.clone(),
                    css: swatch.css(),
                    outline: swatch.needs_outline(),
                    selected: index == selection.selected_index(),
                    href: state.with_color(color),
                }
            })
            .collect();

        Some(Self {
            selected: selection.selected().to_string(),
            swatches,
        })
    }
}

/// A tab button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub key: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product.html")]
pub struct ProductTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub name: String,
    pub category: String,
    pub category_lower: String,
    pub price: String,
    pub short_description: String,
    pub badges: Vec<&'static str>,
    pub tags: Vec<String>,
    pub gallery: Option<GalleryView>,
    pub colors: Option<ColorSelectorView>,
    pub tabs: Vec<TabView>,
    pub active_tab: &'static str,
    pub body: Vec<BlockView>,
    pub craftsmanship: String,
    pub styling: String,
    pub care: String,
    pub related: Vec<ProductCardView>,
    pub scroll_locked: bool,
}

/// Display a product.
///
/// Only slugs enumerated at startup are served; anything else is a 404
/// without a content store lookup.
#[instrument(skip(state, query), fields(slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ProductQuery>,
) -> Result<ProductTemplate> {
    let slug = Slug::new(slug);
    if !state.product_slugs().contains(&slug) {
        return Err(AppError::NotFound(format!("product {slug}")));
    }

    let content = state.content();
    let (product, settings) =
        tokio::try_join!(content.product_by_slug(&slug), content.site_settings())?;
    let product = product.ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    let related = match &product.category {
        Some(category) => content.related_products(&category.slug, &product.slug).await?,
        None => Vec::new(),
    };
    let related = select_related(&related, &product.slug, RELATED_PRODUCTS_LIMIT);

    let tab = ProductTab::from_key(query.tab.as_deref());
    let page = PageState {
        base: format!("/products/{}", product.slug),
        color: query.color.clone().filter(|c| !c.trim().is_empty()),
        image: query.image_index(),
        lightbox: query.lightbox_open(),
        tab,
    };

    let images = state.images();
    let layout = super::layout_view(&state, settings.as_ref());
    let gallery = GalleryView::new(images, &product, &page);
    let colors = ColorSelectorView::new(&product, page.color.as_deref(), &page);

    let tabs = ProductTab::ALL
        .into_iter()
        .map(|t| TabView {
            key: t.key(),
            label: t.label(),
            href: page.with_tab(t),
            active: t == tab,
        })
        .collect();

    let category = product.category_name().to_string();
    Ok(ProductTemplate {
        title: format!("{} | {}", product.name, layout.brand_name),
        description: product
            .short_description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| {
                format!("{} - Premium clothing from {}", product.name, layout.brand_name)
            }),
        name: product.name.clone(),
        category_lower: category.to_lowercase(),
        category,
        price: product.price.display(),
        short_description: product.short_description.clone().unwrap_or_default(),
        badges: product.badges.labels(),
        tags: product.tags.iter().map(|tag| tag.replace('-', " ")).collect(),
        scroll_locked: gallery.as_ref().is_some_and(GalleryView::scroll_locked),
        gallery,
        colors,
        tabs,
        active_tab: tab.key(),
        body: rich_text(&product.description),
        craftsmanship: product.craftsmanship.clone().unwrap_or_default(),
        styling: product.styling.clone().unwrap_or_default(),
        care: product.care.clone().unwrap_or_default(),
        related: ProductCardView::list(images, &related),
        layout,
    })
}
