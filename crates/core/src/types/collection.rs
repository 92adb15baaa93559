//! Curated collections (lookbooks).

use serde::{Deserialize, Deserializer, Serialize};

use super::{ImageRef, Ordered, RichText, Slug, null_as_default};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: RichText,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default)]
    pub order: Option<i64>,
    /// Projections filter on `isActive`, so a missing or null flag means active.
    #[serde(default = "active_by_default", deserialize_with = "null_as_active")]
    pub is_active: bool,
}

const fn active_by_default() -> bool {
    true
}

fn null_as_active<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

impl Ordered for Collection {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_projection() {
        let collection: Collection = serde_json::from_str(
            r#"{"_id":"c1","title":"Heritage Collection","slug":{"current":"heritage"},
                "description":"Timeless elegance","image":"/images/collections/heritage.jpg",
                "gallery":null,"order":2}"#,
        )
        .unwrap();
        assert_eq!(collection.slug, "heritage");
        assert!(collection.is_active);
        assert!(collection.gallery.is_empty());
        assert_eq!(collection.order(), Some(2));
    }

    #[test]
    fn test_null_active_flag_means_active() {
        let collection: Collection = serde_json::from_value(serde_json::json!({
            "_id": "c2",
            "title": "Festive Edit",
            "slug": {"current": "festive"},
            "isActive": null,
        }))
        .unwrap();
        assert!(collection.is_active);

        let hidden: Collection = serde_json::from_value(serde_json::json!({
            "_id": "c3",
            "title": "Archive",
            "slug": {"current": "archive"},
            "isActive": false,
        }))
        .unwrap();
        assert!(!hidden.is_active);
    }
}
