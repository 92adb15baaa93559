//! Display data shared by several templates.
//!
//! Views hold plain strings so templates never resolve image references,
//! format prices or look up swatches themselves.

use sayura_core::widgets::{HeaderStyle, swatch_for};
use sayura_core::{ImageRef, ListKind, Node, Product, RichText, Segment};

use crate::content::defaults::LayoutContent;
use crate::sanity::ImageUrlBuilder;

/// Card image width used in product grids.
pub const CARD_IMAGE_WIDTH: u32 = 600;
/// Card image height (3:4 portrait crop).
pub const CARD_IMAGE_HEIGHT: u32 = 800;

/// A resolved image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    /// Blurred low-resolution rendition, empty for static images.
    pub placeholder: String,
    pub alt: String,
}

impl ImageView {
    /// Resolve `image`, falling back to `alt` when the image carries none.
    ///
    /// Returns `None` when the reference cannot be turned into a URL.
    #[must_use]
    pub fn resolve(
        images: &ImageUrlBuilder,
        image: &ImageRef,
        width: u32,
        height: Option<u32>,
        alt: &str,
    ) -> Option<Self> {
        let mut url = images.image(image).width(width);
        if let Some(height) = height {
            url = url.height(height);
        }
        let url = url.url();
        if url.is_empty() {
            return None;
        }

        let placeholder = if image.asset().is_some() {
            images.blur_placeholder_url(image)
        } else {
            String::new()
        };

        Some(Self {
            url,
            placeholder,
            alt: image.alt().unwrap_or(alt).to_string(),
        })
    }
}

/// A navigation or footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

/// Header and footer content for every page.
#[derive(Debug, Clone)]
pub struct LayoutView {
    pub brand_name: String,
    pub tagline: String,
    pub logo: Option<ImageView>,
    pub nav_links: Vec<LinkView>,
    pub customer_care: Vec<LinkView>,
    pub legal: Vec<LinkView>,
    pub contact_email: String,
    pub contact_phone: String,
    pub instagram_url: String,
    pub facebook_url: Option<String>,
    pub pinterest_url: Option<String>,
    pub blurb: String,
    pub meta_description: String,
    /// Header CSS variables for the initial render.
    pub header_style: String,
    /// Pages with a full-bleed hero start with a transparent header.
    pub transparent_header: bool,
}

impl LayoutView {
    #[must_use]
    pub fn new(layout: &LayoutContent, images: &ImageUrlBuilder) -> Self {
        let link_views = |links: &[sayura_core::FooterLink]| {
            links
                .iter()
                .map(|link| LinkView {
                    label: link.label.clone(),
                    href: link.href.clone(),
                })
                .collect()
        };

        Self {
            brand_name: layout.brand_name.clone(),
            tagline: layout.tagline.clone(),
            logo: layout
                .logo
                .as_ref()
                .and_then(|logo| ImageView::resolve(images, logo, 240, None, &layout.brand_name)),
            nav_links: link_views(&layout.nav_links),
            customer_care: link_views(&layout.customer_care),
            legal: link_views(&layout.legal),
            contact_email: layout.contact_email.clone(),
            contact_phone: layout.contact_phone.clone(),
            instagram_url: layout.instagram_url.clone(),
            facebook_url: layout.social.facebook.clone().filter(|u| !u.is_empty()),
            pinterest_url: layout.social.pinterest.clone().filter(|u| !u.is_empty()),
            blurb: layout.blurb(),
            meta_description: layout
                .meta_description
                .clone()
                .unwrap_or_else(|| layout.blurb()),
            header_style: HeaderStyle::solid().css_variables(),
            transparent_header: false,
        }
    }

    /// Start with the transparent header used over full-bleed heroes.
    ///
    /// The header turns solid as the page scrolls.
    #[must_use]
    pub fn with_transparent_header(mut self) -> Self {
        self.header_style = HeaderStyle::at_offset(0.0).css_variables();
        self.transparent_header = true;
        self
    }
}

/// A color swatch link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchView {
    pub name: String,
    pub css: &'static str,
    pub outline: bool,
    pub selected: bool,
    pub href: String,
}

/// A product in a grid.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub name: String,
    pub href: String,
    pub category: String,
    pub price: String,
    pub image: Option<ImageView>,
    pub hover_image: Option<ImageView>,
    pub badges: Vec<&'static str>,
    pub swatches: Vec<SwatchView>,
    pub short_description: String,
}

impl ProductCardView {
    #[must_use]
    pub fn new(images: &ImageUrlBuilder, product: &Product) -> Self {
        let href = format!("/products/{}", product.slug);
        let card_image = |image: &ImageRef| {
            ImageView::resolve(
                images,
                image,
                CARD_IMAGE_WIDTH,
                Some(CARD_IMAGE_HEIGHT),
                &product.name,
            )
        };

        Self {
            swatches: product
                .colors
                .iter()
                .map(|color| {
                    let swatch = swatch_for(color);
                    SwatchView {
                        name: color.clone(),
                        css: swatch.css(),
                        outline: swatch.needs_outline(),
                        selected: false,
                        href: format!("{href}?color={}", urlencoding::encode(color)),
                    }
                })
                .collect(),
            name: product.name.clone(),
            category: product.category_name().to_string(),
            price: product.price.display(),
            image: product.images.first().and_then(card_image),
            hover_image: product.images.get(1).and_then(card_image),
            badges: product.badges.labels(),
            short_description: product.short_description.clone().unwrap_or_default(),
            href,
        }
    }

    #[must_use]
    pub fn list(images: &ImageUrlBuilder, products: &[Product]) -> Vec<Self> {
        products.iter().map(|p| Self::new(images, p)).collect()
    }
}

// =============================================================================
// Rich text
// =============================================================================

/// A run of text with its marks resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentView {
    pub text: String,
    pub strong: bool,
    pub em: bool,
    /// Link target, empty when the run is not a link.
    pub href: String,
    pub external: bool,
}

impl From<Segment> for SegmentView {
    fn from(segment: Segment) -> Self {
        Self {
            text: segment.text,
            strong: segment.strong,
            em: segment.em,
            href: segment.href.unwrap_or_default(),
            external: segment.external,
        }
    }
}

/// One rendered block element.
///
/// Paragraphs and headings carry a single line; lists carry one line per
/// item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockView {
    pub tag: &'static str,
    pub is_list: bool,
    pub lines: Vec<Vec<SegmentView>>,
}

fn line(segments: Vec<Segment>) -> Vec<SegmentView> {
    segments.into_iter().map(SegmentView::from).collect()
}

/// Flatten rich text into block elements.
#[must_use]
pub fn rich_text(text: &RichText) -> Vec<BlockView> {
    text.nodes()
        .into_iter()
        .map(|node| match node {
            Node::Paragraph(segments) => BlockView {
                tag: "p",
                is_list: false,
                lines: vec![line(segments)],
            },
            Node::Heading3(segments) => BlockView {
                tag: "h3",
                is_list: false,
                lines: vec![line(segments)],
            },
            Node::Heading4(segments) => BlockView {
                tag: "h4",
                is_list: false,
                lines: vec![line(segments)],
            },
            Node::List { kind, items } => BlockView {
                tag: match kind {
                    ListKind::Bullet => "ul",
                    ListKind::Number => "ol",
                },
                is_list: true,
                lines: items.into_iter().map(line).collect(),
            },
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sayura_core::{Badges, Category, Price, Slug};

    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("7x4tky5p", "production")
    }

    fn product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Silk Evening Dress".to_string(),
            slug: Slug::new("silk-evening-dress"),
            category: Some(Category::new("Dresses", "dresses")),
            price: Price::new(12_999),
            images: vec![ImageRef::Asset {
                reference: "image-abc-1200x1600-jpg".to_string(),
                alt: None,
            }],
            colors: vec!["Midnight Blue".to_string(), "Ivory".to_string()],
            badges: Badges {
                is_new: true,
                ..Badges::default()
            },
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
    fn test_product_card() {
        let card = ProductCardView::new(&builder(), &product());
        assert_eq!(card.href, "/products/silk-evening-dress");
        assert_eq!(card.price, "₹12,999");
        assert_eq!(card.category, "Dresses");
        assert_eq!(card.badges, ["New"]);
        assert!(card.hover_image.is_none());

        let image = card.image.unwrap();
        assert!(image.url.contains("w=600&h=800&fit=crop"));
        assert_eq!(image.alt, "Silk Evening Dress");
        assert!(image.placeholder.contains("blur=10"));

        assert_eq!(card.swatches[0].href, "/products/silk-evening-dress?color=Midnight%20Blue");
        assert!(card.swatches[1].outline);
    }

    #[test]
    fn test_static_image_has_no_placeholder() {
        let image =
            ImageView::resolve(&builder(), &ImageRef::url("/static/a.jpg"), 800, None, "A").unwrap();
        assert_eq!(image.url, "/static/a.jpg");
        assert!(image.placeholder.is_empty());
    }

    #[test]
    fn test_rich_text_blocks() {
        let blocks = rich_text(&RichText::from_paragraphs(["One", "Two"]));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].tag, "p");
        assert_eq!(blocks[1].lines[0][0].text, "Two");
    }
}
