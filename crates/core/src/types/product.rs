//! Catalog products.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, ImageRef, Price, RichText, Slug};

/// Merchandising flags shown as badges on product cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badges {
    pub is_new: bool,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_limited: bool,
}

impl Badges {
    /// Badge labels in display order.
    #[must_use]
    pub fn labels(self) -> Vec<&'static str> {
        [
            (self.is_new, "New"),
            (self.is_featured, "Featured"),
            (self.is_best_seller, "Best Seller"),
            (self.is_limited, "Limited Edition"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

/// A product document.
///
/// List projections omit the long-form fields (`description`,
/// `craftsmanship`, `styling`, `care`); they default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub price: Price,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub images: Vec<ImageRef>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub badges: Badges,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: RichText,
    #[serde(default)]
    pub craftsmanship: Option<String>,
    #[serde(default)]
    pub styling: Option<String>,
    #[serde(default)]
    pub care: Option<String>,
    #[serde(default)]
    pub date_added: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub tags: Vec<String>,
}

impl Product {
    /// Category display name, empty when uncategorized.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("", |category| category.name.as_str())
    }

    /// First gallery image, used on cards.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.badges.is_featured
    }
}
