//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use sayura_core::{Collection, Slug, sort_by_order};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::views::{BlockView, ImageView, LayoutView, rich_text};

const LOOKBOOK_IMAGE_WIDTH: u32 = 900;
const LOOKBOOK_IMAGE_HEIGHT: u32 = 1200;
const GALLERY_IMAGE_WIDTH: u32 = 1200;

/// A collection tile in the lookbook grid.
#[derive(Debug, Clone)]
pub struct CollectionCardView {
    pub title: String,
    pub href: String,
    pub description: String,
    pub image: Option<ImageView>,
}

impl CollectionCardView {
    fn new(state: &AppState, collection: &Collection) -> Self {
        Self {
            title: collection.title.clone(),
            href: format!("/collections/{}", collection.slug),
            description: collection.description.clone().unwrap_or_default(),
            image: collection.image.as_ref().and_then(|image| {
                ImageView::resolve(
                    state.images(),
                    image,
                    LOOKBOOK_IMAGE_WIDTH,
                    Some(LOOKBOOK_IMAGE_HEIGHT),
                    &collection.title,
                )
            }),
        }
    }

    /// Tiles for every collection, in `order`.
    pub(crate) fn list(state: &AppState, mut collections: Vec<Collection>) -> Vec<Self> {
        sort_by_order(&mut collections);
        collections.iter().map(|c| Self::new(state, c)).collect()
    }
}

/// Collection lookbook template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/collections.html")]
pub struct CollectionsIndexTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub collections: Vec<CollectionCardView>,
}

/// Collection detail template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/collection.html")]
pub struct CollectionShowTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub collection: CollectionCardView,
    pub body: Vec<BlockView>,
    pub gallery: Vec<ImageView>,
}

/// Display the collection lookbook.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CollectionsIndexTemplate> {
    let content = state.content();
    let (collections, settings) = tokio::try_join!(content.collections(), content.site_settings())?;

    let layout = super::layout_view(&state, settings.as_ref());
    Ok(CollectionsIndexTemplate {
        title: format!("Collections | {}", layout.brand_name),
        description: format!(
            "Explore {}'s curated collections featuring exquisite designs and timeless elegance.",
            layout.brand_name
        ),
        collections: CollectionCardView::list(&state, collections),
        layout,
    })
}

/// Display a single collection.
#[instrument(skip(state), fields(slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<CollectionShowTemplate> {
    let slug = Slug::new(slug);
    let content = state.content();
    let (collection, settings) =
        tokio::try_join!(content.collection_by_slug(&slug), content.site_settings())?;

    let collection = collection
        .filter(|c| c.is_active)
        .ok_or_else(|| AppError::NotFound(format!("collection {slug}")))?;

    let layout = super::layout_view(&state, settings.as_ref());
    let gallery = collection
        .gallery
        .iter()
        .filter_map(|image| {
            ImageView::resolve(
                state.images(),
                image,
                GALLERY_IMAGE_WIDTH,
                None,
                &collection.title,
            )
        })
        .collect();

    Ok(CollectionShowTemplate {
        title: format!("{} | {}", collection.title, layout.brand_name),
        description: collection
            .description
            .clone()
            .unwrap_or_else(|| layout.meta_description.clone()),
        body: rich_text(&collection.long_description),
        collection: CollectionCardView::new(&state, &collection),
        gallery,
        layout,
    })
}
