//! Store locator route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use sayura_core::StoreLocation;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{ImageView, LayoutView};

const STORE_IMAGE_WIDTH: u32 = 800;
const STORE_IMAGE_HEIGHT: u32 = 500;

#[derive(Debug, Default, Deserialize)]
pub struct StoresQuery {
    /// Store `_id` to highlight.
    pub store: Option<String>,
}

/// A store card in the list.
#[derive(Debug, Clone)]
pub struct StoreView {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub hours: String,
    pub directions_url: String,
    pub image: Option<ImageView>,
    pub href: String,
    pub selected: bool,
}

/// Index of the store to highlight: the requested one, else the first.
fn selected_index(stores: &[StoreLocation], requested: Option<&str>) -> usize {
    requested
        .and_then(|id| stores.iter().position(|store| store.id == id))
        .unwrap_or(0)
}

/// Store locator template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/stores.html")]
pub struct StoresTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub stores: Vec<StoreView>,
    pub selected: Option<StoreView>,
}

/// Display the store locator.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<StoresQuery>,
) -> Result<StoresTemplate> {
    let content = state.content();
    let (stores, settings) = tokio::try_join!(content.store_locations(), content.site_settings())?;

    let selected = selected_index(&stores, query.store.as_deref());
    let stores: Vec<StoreView> = stores
        .iter()
        .enumerate()
        .map(|(index, store)| StoreView {
            name: store.name.clone(),
            address: store.address.clone(),
            phone: store.phone.clone().unwrap_or_default(),
            phone_href: store.phone_href().unwrap_or_default(),
            email: store.email.clone().unwrap_or_default(),
            hours: store.hours.clone().unwrap_or_default(),
            directions_url: store.directions_url(),
            image: store.image.as_ref().and_then(|image| {
                ImageView::resolve(
                    state.images(),
                    image,
                    STORE_IMAGE_WIDTH,
                    Some(STORE_IMAGE_HEIGHT),
                    &store.name,
                )
            }),
            href: format!("/stores?store={}", urlencoding::encode(&store.id)),
            selected: index == selected,
        })
        .collect();

    let layout = super::layout_view(&state, settings.as_ref());
    Ok(StoresTemplate {
        title: format!("Store Locator | {}", layout.brand_name),
        description: format!(
            "Find {} stores near you. Visit us for an exclusive shopping experience and personalized styling services.",
            layout.brand_name
        ),
        selected: stores.get(selected).cloned(),
        stores,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(id: &str) -> StoreLocation {
        StoreLocation {
            id: id.to_string(),
            name: id.to_uppercase(),
            address: String::new(),
            phone: None,
            email: None,
            hours: None,
            coordinates: None,
            image: None,
        }
    }

    #[test]
    fn test_selected_store() {
        let stores = [store("mumbai"), store("delhi")];
        assert_eq!(selected_index(&stores, Some("delhi")), 1);
        assert_eq!(selected_index(&stores, Some("paris")), 0);
        assert_eq!(selected_index(&stores, None), 0);
        assert_eq!(selected_index(&[], None), 0);
    }
}
