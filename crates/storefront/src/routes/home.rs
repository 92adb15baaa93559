//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use sayura_core::{InstagramPost, sort_by_order};
use tracing::instrument;

use super::collections::CollectionCardView;
use crate::content::defaults::{HeroContent, INSTAGRAM_HANDLE};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{ImageView, LayoutView, ProductCardView};

/// Collections featured below the hero.
const FEATURED_COLLECTIONS: usize = 2;

const HERO_IMAGE_WIDTH: u32 = 1920;
const INSTAGRAM_IMAGE_SIZE: u32 = 600;

/// Full-bleed hero with an optional background video.
#[derive(Debug, Clone)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub video_url: Option<String>,
    pub image: Option<ImageView>,
    pub poster: Option<ImageView>,
}

impl HeroView {
    fn new(state: &AppState, hero: HeroContent) -> Self {
        let images = state.images();
        let resolve = |image: &sayura_core::ImageRef| {
            ImageView::resolve(images, image, HERO_IMAGE_WIDTH, None, &hero.title)
        };

        Self {
            video_url: hero
                .background_video
                .as_ref()
                .and_then(|video| images.file_url(video)),
            image: hero.background_image.as_ref().and_then(resolve),
            poster: hero.poster_image.as_ref().and_then(resolve),
            title: hero.title,
            subtitle: hero.subtitle,
            cta_text: hero.cta_text,
            cta_link: hero.cta_link,
        }
    }
}

/// A tile in the Instagram feed.
#[derive(Debug, Clone)]
pub struct InstagramTileView {
    pub image: ImageView,
    pub caption: String,
    pub url: String,
}

fn instagram_tiles(
    state: &AppState,
    mut posts: Vec<InstagramPost>,
    profile_url: &str,
) -> Vec<InstagramTileView> {
    sort_by_order(&mut posts);
    posts
        .into_iter()
        .filter(|post| post.is_active)
        .filter_map(|post| {
            let caption = post.caption.unwrap_or_default();
            let image = ImageView::resolve(
                state.images(),
                post.image.as_ref()?,
                INSTAGRAM_IMAGE_SIZE,
                Some(INSTAGRAM_IMAGE_SIZE),
                &caption,
            )?;
            Some(InstagramTileView {
                image,
                url: post
                    .url
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| profile_url.to_string()),
                caption,
            })
        })
        .collect()
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub hero: HeroView,
    pub collections: Vec<CollectionCardView>,
    pub featured: Vec<ProductCardView>,
    pub instagram: Vec<InstagramTileView>,
    pub instagram_url: String,
    pub instagram_handle: &'static str,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let content = state.content();
    let (hero, collections, featured, posts, settings) = tokio::try_join!(
        content.hero_section(),
        content.collections(),
        content.featured_products(),
        content.instagram_posts(),
        content.site_settings(),
    )?;

    let layout = super::layout_view(&state, settings.as_ref()).with_transparent_header();
    let instagram = instagram_tiles(&state, posts, &layout.instagram_url);

    Ok(HomeTemplate {
        title: format!("{} | {}", layout.brand_name, layout.tagline),
        description: layout.meta_description.clone(),
        hero: HeroView::new(&state, HeroContent::merge(hero)),
        collections: CollectionCardView::list(&state, collections)
            .into_iter()
            .take(FEATURED_COLLECTIONS)
            .collect(),
        featured: ProductCardView::list(state.images(), &featured),
        instagram,
        instagram_url: layout.instagram_url.clone(),
        instagram_handle: INSTAGRAM_HANDLE,
        layout,
    })
}
