//! Compiled-in page content.
//!
//! Every editable page region has a default here. Fetched documents are
//! merged over the defaults field by field: a missing or blank field falls
//! back, a present one wins. Missing documents are never an error.

use sayura_core::{
    AboutPage, BrandValue, ContactFormConfig, ContactIcon, ContactInfoCard, ContactPageConfig,
    ContentSection, FieldType, FileRef, FooterLink, FormField, HeroSection, ImagePosition,
    ImageRef, RichText, SiteSettings, SocialLinks, ValueIcon, sort_by_order,
};

pub const BRAND_NAME: &str = "SAYURA";
pub const TAGLINE: &str = "Timeless Elegance";
pub const CONTACT_EMAIL: &str = "hello@sayura.in";
pub const CONTACT_PHONE: &str = "+91 1234 567890";
pub const INSTAGRAM_URL: &str = "https://instagram.com/sayura.in";
pub const INSTAGRAM_HANDLE: &str = "@sayura.in";
pub const NEWSLETTER_SUCCESS: &str = "Thank you for subscribing!";

const NAV_LINKS: [(&str, &str); 5] = [
    ("Collections", "/collections"),
    ("New Arrivals", "/new-arrivals"),
    ("Store Locator", "/stores"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

const CUSTOMER_CARE_LINKS: [(&str, &str); 4] = [
    ("Shipping & Delivery", "/shipping"),
    ("Returns & Exchanges", "/returns"),
    ("Size Guide", "/size-guide"),
    ("FAQ", "/faq"),
];

const LEGAL_LINKS: [(&str, &str); 2] = [("Privacy Policy", "/privacy"), ("Terms of Service", "/terms")];

/// Returns the value unless it is missing or blank.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or(value: Option<String>, default: &str) -> String {
    present(value).unwrap_or_else(|| default.to_string())
}

fn links(table: &[(&str, &str)]) -> Vec<FooterLink> {
    table
        .iter()
        .zip(1..)
        .map(|(&(label, href), order)| FooterLink::new(label, href, order))
        .collect()
}

// =============================================================================
// Layout
// =============================================================================

/// Site-wide content shared by the header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutContent {
    pub brand_name: String,
    pub tagline: String,
    pub logo: Option<ImageRef>,
    pub logo_minimized: Option<ImageRef>,
    pub contact_email: String,
    pub contact_phone: String,
    pub social: SocialLinks,
    pub instagram_url: String,
    pub nav_links: Vec<FooterLink>,
    pub customer_care: Vec<FooterLink>,
    pub legal: Vec<FooterLink>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl LayoutContent {
    #[must_use]
    pub fn merge(settings: Option<&SiteSettings>) -> Self {
        let settings = settings.cloned().map(SiteSettings::sorted).unwrap_or_default();
        let footer = settings.footer_links.unwrap_or_default();

        let customer_care = if footer.customer_care.is_empty() {
            links(&CUSTOMER_CARE_LINKS)
        } else {
            footer.customer_care
        };
        let legal = if footer.legal.is_empty() {
            links(&LEGAL_LINKS)
        } else {
            footer.legal
        };

        Self {
            brand_name: or(settings.brand_name, BRAND_NAME),
            tagline: or(settings.tagline, TAGLINE),
            logo: settings.logo,
            logo_minimized: settings.logo_minimized,
            contact_email: or(settings.contact_email, CONTACT_EMAIL),
            contact_phone: or(settings.contact_phone, CONTACT_PHONE),
            instagram_url: or(settings.social_links.instagram.clone(), INSTAGRAM_URL),
            social: settings.social_links,
            nav_links: links(&NAV_LINKS),
            customer_care,
            legal,
            meta_title: present(settings.seo.meta_title),
            meta_description: present(settings.seo.meta_description),
        }
    }

    #[must_use]
    pub fn blurb(&self) -> String {
        format!(
            "Discover timeless elegance and exceptional craftsmanship with {}'s exclusive collection of premium clothing.",
            self.brand_name
        )
    }
}

// =============================================================================
// Home
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_video: Option<FileRef>,
    pub background_image: Option<ImageRef>,
    pub poster_image: Option<ImageRef>,
}

impl HeroContent {
    #[must_use]
    pub fn merge(hero: Option<HeroSection>) -> Self {
        let hero = hero.unwrap_or_default();
        Self {
            title: or(hero.title, "TIMELESS ELEGANCE"),
            subtitle: or(
                hero.subtitle,
                "Discover our exclusive collection of premium clothing, where tradition meets contemporary design",
            ),
            cta_text: or(hero.cta_text, "EXPLORE"),
            cta_link: or(hero.cta_link, "/collections"),
            background_video: hero.background_video,
            background_image: hero.background_image,
            poster_image: hero.poster_image,
        }
    }
}

// =============================================================================
// About
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub page_title: String,
    pub page_description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_background_image: ImageRef,
    pub intro_heading: String,
    pub intro_content: RichText,
    pub sections: Vec<ContentSection>,
    pub values_heading: String,
    pub values_description: String,
    pub values: Vec<BrandValue>,
}

impl AboutContent {
    /// Merge a fetched about page over the defaults.
    ///
    /// A page explicitly marked unpublished counts as absent.
    #[must_use]
    pub fn merge(page: Option<AboutPage>) -> Self {
        let page = page
            .filter(AboutPage::is_published)
            .map(AboutPage::sorted)
            .unwrap_or_default();

        Self {
            page_title: or(page.page_title, "About Us | SAYURA"),
            page_description: or(
                page.page_description,
                "Discover the story behind SAYURA - a brand dedicated to timeless elegance, exceptional craftsmanship, and sustainable luxury.",
            ),
            hero_title: or(page.hero_title, "Our Story"),
            hero_subtitle: or(
                page.hero_subtitle,
                "Where heritage meets innovation, and every piece tells a story of passion, dedication, and timeless beauty",
            ),
            hero_background_image: page
                .hero_background_image
                .unwrap_or_else(|| ImageRef::url("/static/images/about/about-hero.jpg")),
            intro_heading: or(page.intro_heading, "Crafting Elegance Since 2010"),
            intro_content: if page.intro_content.is_empty() {
                default_intro()
            } else {
                page.intro_content
            },
            sections: if page.content_sections.is_empty() {
                default_sections()
            } else {
                page.content_sections
            },
            values_heading: or(page.values_heading, "Our Values"),
            values_description: or(
                page.values_description,
                "The principles that guide us in everything we do",
            ),
            values: if page.values.is_empty() {
                default_values()
            } else {
                page.values
            },
        }
    }
}

fn default_intro() -> RichText {
    RichText::from_paragraphs([
        "SAYURA was born from a vision to create clothing that transcends trends and celebrates the beauty of craftsmanship. Our journey began with a simple belief: that true luxury lies in the details, the quality of materials, and the skill of artisans who pour their hearts into every stitch.",
        "Today, we continue to honor this vision by creating pieces that empower individuals to express their unique style while embracing timeless elegance.",
    ])
}

fn default_sections() -> Vec<ContentSection> {
    vec![
        ContentSection {
            title: "Heritage & Craftsmanship".to_string(),
            content: RichText::from_paragraphs([
                "Each SAYURA piece is a testament to the centuries-old traditions of textile artistry. We work closely with master artisans who have honed their skills over generations, ensuring that every garment meets our exacting standards of quality and beauty.",
                "From hand-embroidered details to carefully selected fabrics, we believe in preserving traditional techniques while embracing modern design sensibilities.",
            ]),
            image: Some(ImageRef::url("/static/images/about/craftsmanship.jpg")),
            image_position: ImagePosition::Left,
            order: Some(1),
        },
        ContentSection {
            title: "Sustainable Luxury".to_string(),
            content: RichText::from_paragraphs([
                "We believe that true luxury should never come at the cost of our planet. That's why we're committed to sustainable practices throughout our supply chain, from sourcing eco-friendly materials to ensuring fair working conditions for our artisans.",
                "Every SAYURA garment is designed to last, both in terms of quality and style. We create pieces that you'll cherish for years to come, reducing the need for constant replacement and minimizing environmental impact.",
            ]),
            image: Some(ImageRef::url("/static/images/about/sustainability.jpg")),
            image_position: ImagePosition::Right,
            order: Some(2),
        },
    ]
}

fn default_values() -> Vec<BrandValue> {
    [
        (
            ValueIcon::Sparkles,
            "Excellence",
            "We never compromise on quality, ensuring every piece meets our rigorous standards of craftsmanship and design.",
        ),
        (
            ValueIcon::Heart,
            "Passion",
            "Our love for fashion and dedication to our craft drives us to create pieces that inspire and delight.",
        ),
        (
            ValueIcon::Leaf,
            "Sustainability",
            "We are committed to ethical practices and environmental responsibility in every aspect of our business.",
        ),
        (
            ValueIcon::Users,
            "Community",
            "We value the artisans, partners, and customers who make SAYURA possible, fostering meaningful relationships.",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, description), order)| BrandValue {
        icon,
        title: title.to_string(),
        description: description.to_string(),
        order: Some(order),
    })
    .collect()
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactContent {
    pub page_title: String,
    pub page_description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_background_image: Option<ImageRef>,
    pub section_heading: String,
    pub section_intro: String,
    pub cards: Vec<ContactInfoCard>,
    pub form: FormContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContent {
    pub recipient_email: String,
    pub fields: Vec<FormField>,
    pub success_message: String,
    pub error_message: String,
}

impl ContactContent {
    #[must_use]
    pub fn merge(settings: Option<&SiteSettings>, brand_name: &str) -> Self {
        let page: ContactPageConfig = settings
            .and_then(|s| s.contact_page.clone())
            .unwrap_or_default();
        let form = FormContent::merge(settings.and_then(|s| s.contact_form.clone()));

        let mut cards = page.contact_info_cards;
        if cards.is_empty() {
            cards = default_cards();
        } else {
            sort_by_order(&mut cards);
        }

        let hero_title = or(page.hero_title, "Contact Us");
        Self {
            page_title: format!("{hero_title} | {brand_name}"),
            page_description: "Get in touch with SAYURA. We're here to help with any questions about our collections, stores, or services.".to_string(),
            hero_subtitle: or(
                page.hero_subtitle,
                "We'd love to hear from you",
            ),
            hero_title,
            hero_background_image: page.hero_background_image,
            section_heading: or(page.section_heading, "Get in Touch"),
            section_intro: or(
                page.section_intro,
                "Have a question or need assistance? Our team is here to help. Reach out to us and we'll get back to you as soon as possible.",
            ),
            cards,
            form,
        }
    }
}

impl FormContent {
    #[must_use]
    pub fn merge(config: Option<ContactFormConfig>) -> Self {
        let config = config.unwrap_or_default();
        let mut fields: Vec<FormField> = config
            .fields
            .into_iter()
            .filter(|field| !field.name.trim().is_empty())
            .collect();
        if fields.is_empty() {
            fields = default_fields();
        } else {
            sort_by_order(&mut fields);
        }

        Self {
            recipient_email: or(config.recipient_email, CONTACT_EMAIL),
            fields,
            success_message: or(
                config.success_message,
                "Your message has been sent successfully. We'll get back to you soon.",
            ),
            error_message: or(
                config.error_message,
                "Something went wrong. Please check the form and try again.",
            ),
        }
    }
}

fn default_cards() -> Vec<ContactInfoCard> {
    [
        (ContactIcon::Mail, "Email Us", vec!["hello@sayura.in", "support@sayura.in"]),
        (
            ContactIcon::Phone,
            "Call Us",
            vec!["+91 1234 567890", "Mon-Sat, 10:00 AM - 7:00 PM IST"],
        ),
        (
            ContactIcon::MapPin,
            "Visit Us",
            vec![
                "123 Fashion Street",
                "Bandra West, Mumbai",
                "Maharashtra 400050, India",
            ],
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, lines), order)| ContactInfoCard {
        icon,
        title: title.to_string(),
        lines: lines.into_iter().map(str::to_string).collect(),
        order: Some(order),
    })
    .collect()
}

fn default_fields() -> Vec<FormField> {
    [
        ("name", "Name", FieldType::Text, true, "Your name"),
        ("email", "Email", FieldType::Email, true, "your@email.com"),
        ("phone", "Phone", FieldType::Tel, false, "+91 1234 567890"),
        ("subject", "Subject", FieldType::Text, true, "How can we help?"),
        ("message", "Message", FieldType::Textarea, true, "Tell us more..."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, label, field_type, required, placeholder), order)| FormField {
        name: name.to_string(),
        label: label.to_string(),
        field_type,
        required,
        placeholder: Some(placeholder.to_string()),
        order: Some(order),
    })
    .collect()
}
