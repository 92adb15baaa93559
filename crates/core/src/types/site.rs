//! Site-wide settings singleton.
//!
//! Besides brand identity this document carries the editable copy of the
//! contact page, the contact form definition and the footer link lists.
//! Every nested block is optional; the storefront merges whatever is present
//! over its compiled-in defaults.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ImageRef, Ordered, null_as_default, sort_by_order};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub pinterest: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_image: Option<ImageRef>,
}

/// Icon of a contact info card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactIcon {
    #[default]
    Mail,
    Phone,
    MapPin,
    Clock,
}

impl ContactIcon {
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "phone" => Self::Phone,
            "map-pin" | "mappin" | "location" => Self::MapPin,
            "clock" | "hours" => Self::Clock,
            _ => Self::Mail,
        }
    }

    /// SVG path data for a 24x24 stroked icon.
    #[must_use]
    pub const fn svg_path(self) -> &'static str {
        match self {
            Self::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 7l-10 7L2 7",
            Self::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"
            }
            Self::MapPin => "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            Self::Clock => "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20 M12 6v6l4 2",
        }
    }
}

impl<'de> Deserialize<'de> for ContactIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(key.as_deref().map(Self::from_key).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfoCard {
    #[serde(default)]
    pub icon: ContactIcon,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Ordered for ContactInfoCard {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPageConfig {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_background_image: Option<ImageRef>,
    pub section_heading: Option<String>,
    pub section_intro: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_info_cards: Vec<ContactInfoCard>,
}

/// Input type of a configured form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    #[serde(other)]
    Other,
}

impl FieldType {
    /// Value for the `type` attribute of an `<input>`.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Text | Self::Textarea | Self::Other => "text",
        }
    }

    #[must_use]
    pub const fn is_textarea(self) -> bool {
        matches!(self, Self::Textarea)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Ordered for FormField {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormConfig {
    pub recipient_email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<FormField>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub order: Option<i64>,
}

impl FooterLink {
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>, order: i64) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            order: Some(order),
        }
    }
}

impl Ordered for FooterLink {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLinksConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_care: Vec<FooterLink>,
    #[serde(deserialize_with = "null_as_default")]
    pub legal: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub brand_name: Option<String>,
    pub logo: Option<ImageRef>,
    pub logo_minimized: Option<ImageRef>,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
    #[serde(deserialize_with = "null_as_default")]
    pub seo: Seo,
    pub contact_page: Option<ContactPageConfig>,
    pub contact_form: Option<ContactFormConfig>,
    pub footer_links: Option<FooterLinksConfig>,
}

impl SiteSettings {
    /// Sort every nested orderable list by its `order` field.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        if let Some(page) = self.contact_page.as_mut() {
            sort_by_order(&mut page.contact_info_cards);
        }
        if let Some(form) = self.contact_form.as_mut() {
            sort_by_order(&mut form.fields);
        }
        if let Some(links) = self.footer_links.as_mut() {
            sort_by_order(&mut links.customer_care);
            sort_by_order(&mut links.legal);
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_settings() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{"brandName":"SAYURA","socialLinks":null}"#).unwrap();
        assert_eq!(settings.brand_name.as_deref(), Some("SAYURA"));
        assert!(settings.footer_links.is_none());
        assert!(settings.social_links.instagram.is_none());
    }

    #[test]
    fn test_nested_lists_sorted() {
        let settings = serde_json::from_str::<SiteSettings>(
            r#"{
                "contactForm": {"fields": [
                    {"name": "message", "label": "Message", "fieldType": "textarea", "required": true, "order": 2},
                    {"name": "name", "label": "Name", "fieldType": "text", "required": true, "order": 1}
                ]},
                "footerLinks": {"legal": [
                    {"label": "Terms of Service", "href": "/terms", "order": 2},
                    {"label": "Privacy Policy", "href": "/privacy", "order": 1}
                ]}
            }"#,
        )
        .unwrap()
        .sorted();

        let form = settings.contact_form.unwrap();
        assert_eq!(form.fields[0].name, "name");
        assert!(form.fields[1].field_type.is_textarea());

        let links = settings.footer_links.unwrap();
        assert!(links.customer_care.is_empty());
        assert_eq!(links.legal[0].label, "Privacy Policy");
    }

    #[test]
    fn test_field_type_fallback() {
        let field: FormField =
            serde_json::from_str(r#"{"name":"dob","fieldType":"date"}"#).unwrap();
        assert_eq!(field.field_type, FieldType::Other);
        assert_eq!(field.field_type.input_type(), "text");
        assert!(!field.required);
    }

    #[test]
    fn test_contact_icon_keys() {
        assert_eq!(ContactIcon::from_key("Map-Pin"), ContactIcon::MapPin);
        assert_eq!(ContactIcon::from_key("unknown"), ContactIcon::Mail);
    }
}
