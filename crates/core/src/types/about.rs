//! The About page singleton.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ImageRef, Ordered, RichText, null_as_default, sort_by_order};

/// Which side of a content section the image sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

/// One story section (heading, rich text, image).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: RichText,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_position: ImagePosition,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Ordered for ContentSection {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

/// Icon shown above a brand value.
///
/// The CMS stores a free-form key; unknown keys render as [`ValueIcon::Sparkles`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueIcon {
    #[default]
    Sparkles,
    Heart,
    Leaf,
    Users,
    Award,
    Shield,
    Star,
    Target,
}

impl ValueIcon {
    pub const ALL: [Self; 8] = [
        Self::Sparkles,
        Self::Heart,
        Self::Leaf,
        Self::Users,
        Self::Award,
        Self::Shield,
        Self::Star,
        Self::Target,
    ];

    /// Case-insensitive lookup with the sparkles fallback.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|icon| icon.key() == key)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sparkles => "sparkles",
            Self::Heart => "heart",
            Self::Leaf => "leaf",
            Self::Users => "users",
            Self::Award => "award",
            Self::Shield => "shield",
            Self::Star => "star",
            Self::Target => "target",
        }
    }

    /// SVG path data for a 24x24 stroked icon.
    #[must_use]
    pub const fn svg_path(self) -> &'static str {
        match self {
            Self::Sparkles => {
                "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9L12 3z M19 17v4 M17 19h4"
            }
            Self::Heart => {
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z"
            }
            Self::Leaf => {
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10z M2 21c0-3 1.85-5.36 5.08-6"
            }
            Self::Users => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2 M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8 M22 21v-2a4 4 0 0 0-3-3.87 M16 3.13a4 4 0 0 1 0 7.75"
            }
            Self::Award => "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12 M15.48 12.89L17 22l-5-3-5 3 1.52-9.11",
            Self::Shield => {
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"
            }
            Self::Star => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"
            }
            Self::Target => {
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20 M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12 M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4"
            }
        }
    }
}

impl<'de> Deserialize<'de> for ValueIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(key.as_deref().map(Self::from_key).unwrap_or_default())
    }
}

/// One brand value card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandValue {
    #[serde(default)]
    pub icon: ValueIcon,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Ordered for BrandValue {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

/// The About page document. Every field is optional; see the storefront's
/// page defaults for what fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    #[serde(default)]
    pub page_title: Option<String>,
    #[serde(default)]
    pub page_description: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_background_image: Option<ImageRef>,
    #[serde(default)]
    pub intro_heading: Option<String>,
    #[serde(default)]
    pub intro_content: RichText,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_sections: Vec<ContentSection>,
    #[serde(default)]
    pub values_heading: Option<String>,
    #[serde(default)]
    pub values_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<BrandValue>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

impl AboutPage {
    /// Only an explicit `false` unpublishes the page.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.is_published != Some(false)
    }

    /// Sort sections and values by their `order` field.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        sort_by_order(&mut self.content_sections);
        sort_by_order(&mut self.values);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_lookup() {
        assert_eq!(ValueIcon::from_key("Heart"), ValueIcon::Heart);
        assert_eq!(ValueIcon::from_key(" target "), ValueIcon::Target);
        assert_eq!(ValueIcon::from_key("rocket"), ValueIcon::Sparkles);
        assert_eq!(ValueIcon::from_key(""), ValueIcon::Sparkles);
    }

    #[test]
    fn test_every_icon_has_path() {
        for icon in ValueIcon::ALL {
            assert!(icon.svg_path().starts_with('M'), "{}", icon.key());
        }
    }

    #[test]
    fn test_unknown_icon_deserializes_to_default() {
        let value: BrandValue =
            serde_json::from_str(r#"{"icon":"rocket","title":"Bold","order":1}"#).unwrap();
        assert_eq!(value.icon, ValueIcon::Sparkles);
    }

    #[test]
    fn test_published_flag() {
        let page: AboutPage = serde_json::from_str("{}").unwrap();
        assert!(page.is_published());
        let page: AboutPage = serde_json::from_str(r#"{"isPublished":false}"#).unwrap();
        assert!(!page.is_published());
    }

    #[test]
    fn test_sorted_orders_sections_and_values() {
        let page = serde_json::from_str::<AboutPage>(
            r#"{
                "contentSections": [
                    {"title": "Sustainability", "imagePosition": "right", "order": 2},
                    {"title": "Craftsmanship", "imagePosition": "left", "order": 1}
                ],
                "values": [
                    {"icon": "leaf", "title": "Later", "order": 5},
                    {"icon": "heart", "title": "Sooner", "order": 0}
                ]
            }"#,
        )
        .unwrap()
        .sorted();

        assert_eq!(page.content_sections[0].title, "Craftsmanship");
        assert_eq!(page.content_sections[1].image_position, ImagePosition::Right);
        assert_eq!(page.values[0].title, "Sooner");
    }
}
