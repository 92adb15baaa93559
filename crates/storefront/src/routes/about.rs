//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use sayura_core::ImagePosition;
use tracing::instrument;

use crate::content::defaults::AboutContent;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{BlockView, ImageView, LayoutView, rich_text};

const HERO_IMAGE_WIDTH: u32 = 1920;
const SECTION_IMAGE_WIDTH: u32 = 1000;
const SECTION_IMAGE_HEIGHT: u32 = 1250;

/// A story section with its image on one side.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub title: String,
    pub body: Vec<BlockView>,
    pub image: Option<ImageView>,
    pub image_right: bool,
}

/// A brand value card.
#[derive(Debug, Clone)]
pub struct ValueView {
    pub icon_path: &'static str,
    pub title: String,
    pub description: String,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: Option<ImageView>,
    pub intro_heading: String,
    pub intro: Vec<BlockView>,
    pub sections: Vec<SectionView>,
    pub values_heading: String,
    pub values_description: String,
    pub values: Vec<ValueView>,
}

/// Display the about page.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<AboutTemplate> {
    let content = state.content();
    let (page, settings) = tokio::try_join!(content.about_page(), content.site_settings())?;

    let about = AboutContent::merge(page);
    let images = state.images();

    let sections = about
        .sections
        .iter()
        .map(|section| SectionView {
            title: section.title.clone(),
            body: rich_text(&section.content),
            image: section.image.as_ref().and_then(|image| {
                ImageView::resolve(
                    images,
                    image,
                    SECTION_IMAGE_WIDTH,
                    Some(SECTION_IMAGE_HEIGHT),
                    &section.title,
                )
            }),
            image_right: section.image_position == ImagePosition::Right,
        })
        .collect();

    let values = about
        .values
        .iter()
        .map(|value| ValueView {
            icon_path: value.icon.svg_path(),
            title: value.title.clone(),
            description: value.description.clone(),
        })
        .collect();

    Ok(AboutTemplate {
        layout: super::layout_view(&state, settings.as_ref()).with_transparent_header(),
        hero_image: ImageView::resolve(
            images,
            &about.hero_background_image,
            HERO_IMAGE_WIDTH,
            None,
            &about.hero_title,
        ),
        intro: rich_text(&about.intro_content),
        sections,
        values,
        title: about.page_title,
        description: about.page_description,
        hero_title: about.hero_title,
        hero_subtitle: about.hero_subtitle,
        intro_heading: about.intro_heading,
        values_heading: about.values_heading,
        values_description: about.values_description,
    })
}
