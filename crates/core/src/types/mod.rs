//! Content types for SAYURA.
//!
//! Documents are authored in the CMS and arrive loosely typed. Every type in
//! this module deserializes the tolerated variants (string vs. object slugs,
//! inline vs. dereferenced categories, image URLs vs. asset references) and
//! exposes a single canonical shape to the rest of the application.

pub mod about;
pub mod category;
pub mod collection;
pub mod email;
pub mod hero;
pub mod instagram;
pub mod media;
pub mod ordering;
pub mod price;
pub mod product;
pub mod rich_text;
pub mod site;
pub mod slug;
pub mod store;

pub use about::{AboutPage, BrandValue, ContentSection, ImagePosition, ValueIcon};
pub use category::Category;
pub use collection::Collection;
pub use email::{Email, EmailError};
pub use hero::HeroSection;
pub use instagram::InstagramPost;
pub use media::{FileRef, ImageAsset, ImageRef};
pub use ordering::{Ordered, sort_by_order};
pub use price::Price;
pub use product::{Badges, Product};
pub use rich_text::{Block, BlockStyle, ListKind, MarkDef, Node, RichText, Segment, Span};
pub use site::{
    ContactFormConfig, ContactIcon, ContactInfoCard, ContactPageConfig, FieldType, FooterLink,
    FooterLinksConfig, FormField, Seo, SiteSettings, SocialLinks,
};
pub use slug::Slug;
pub use store::{Coordinates, StoreLocation};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
///
/// GROQ projections emit `null` for fields absent on the document, which
/// `#[serde(default)]` alone does not cover.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
