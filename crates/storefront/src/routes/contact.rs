//! Contact page and form route handlers.
//!
//! The form fields come from site settings. Accepted submissions go to the
//! configured [`SubmissionSink`](crate::content::forms::SubmissionSink);
//! nothing is delivered over the network.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::content::defaults::{ContactContent, FormContent};
use crate::content::forms::{ContactFormError, validate_contact};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::{ImageView, LayoutView};

const HERO_IMAGE_WIDTH: u32 = 1920;

/// A contact info card.
#[derive(Debug, Clone)]
pub struct CardView {
    pub icon_path: &'static str,
    pub title: String,
    pub lines: Vec<String>,
}

/// A form input with its submitted value.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub input_type: &'static str,
    pub textarea: bool,
    pub required: bool,
    pub placeholder: String,
    pub value: String,
}

/// The contact form in one of its states.
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub fields: Vec<FieldView>,
    /// Set once a submission was accepted; the form is hidden.
    pub success: String,
    pub error: String,
    pub error_detail: String,
}

impl ContactFormView {
    fn new(form: &FormContent, values: &HashMap<String, String>) -> Self {
        Self {
            fields: form
                .fields
                .iter()
                .map(|field| FieldView {
                    name: field.name.clone(),
                    label: field.label.clone(),
                    input_type: field.field_type.input_type(),
                    textarea: field.field_type.is_textarea(),
                    required: field.required,
                    placeholder: field.placeholder.clone().unwrap_or_default(),
                    value: values.get(&field.name).cloned().unwrap_or_default(),
                })
                .collect(),
            ..Self::default()
        }
    }

    fn rejected(form: &FormContent, values: &HashMap<String, String>, error: &ContactFormError) -> Self {
        Self {
            error: form.error_message.clone(),
            error_detail: match error {
                ContactFormError::MissingFields(labels) => {
                    format!("Please fill in: {}", labels.join(", "))
                }
                ContactFormError::InvalidEmail { label, .. } => {
                    format!("Please enter a valid {}.", label.to_lowercase())
                }
            },
            ..Self::new(form, values)
        }
    }

    fn accepted(form: &FormContent) -> Self {
        Self {
            success: form.success_message.clone(),
            ..Self::default()
        }
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub title: String,
    pub description: String,
    pub layout: LayoutView,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: Option<ImageView>,
    pub section_heading: String,
    pub section_intro: String,
    pub cards: Vec<CardView>,
    pub form: ContactFormView,
}

/// Contact form fragment returned to form posts.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/contact_form.html")]
pub struct ContactFormTemplate {
    pub form: ContactFormView,
}

/// Display the contact page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<ContactTemplate> {
    let settings = state.content().site_settings().await?;
    let layout = super::layout_view(&state, settings.as_ref()).with_transparent_header();
    let contact = ContactContent::merge(settings.as_ref(), &layout.brand_name);

    Ok(ContactTemplate {
        hero_image: contact.hero_background_image.as_ref().and_then(|image| {
            ImageView::resolve(
                state.images(),
                image,
                HERO_IMAGE_WIDTH,
                None,
                &contact.hero_title,
            )
        }),
        cards: contact
            .cards
            .iter()
            .map(|card| CardView {
                icon_path: card.icon.svg_path(),
                title: card.title.clone(),
                lines: card.lines.clone(),
            })
            .collect(),
        form: ContactFormView::new(&contact.form, &HashMap::new()),
        title: contact.page_title,
        description: contact.page_description,
        hero_title: contact.hero_title,
        hero_subtitle: contact.hero_subtitle,
        section_heading: contact.section_heading,
        section_intro: contact.section_intro,
        layout,
    })
}

/// Handle a contact form post.
///
/// Returns the form fragment: a confirmation on success, or the form with
/// the submitted values and an error (422) when validation fails.
#[instrument(skip(state, values))]
pub async fn submit(
    State(state): State<AppState>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Response> {
    let settings = state.content().site_settings().await?;
    let form = FormContent::merge(settings.and_then(|s| s.contact_form));

    let submission = match validate_contact(&form, &values) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::debug!(error = %e, "Contact form rejected");
            let form = ContactFormView::rejected(&form, &values, &e);
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                ContactFormTemplate { form },
            )
                .into_response());
        }
    };

    add_breadcrumb("contact", "Contact form submitted", None);
    state.submissions().contact(&submission).await?;

    Ok(ContactFormTemplate {
        form: ContactFormView::accepted(&form),
    }
    .into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_form_keeps_submitted_values() {
        let form = FormContent::merge(None);
        let view = ContactFormView::new(&form, &values(&[("name", "Asha")]));

        let name = view.fields.iter().find(|f| f.name == "name").unwrap();
        assert_eq!(name.value, "Asha");
        assert!(view.fields.iter().any(|f| f.textarea));
        assert!(view.success.is_empty());
    }

    #[test]
    fn test_rejected_lists_missing_fields() {
        let form = FormContent::merge(None);
        let error = ContactFormError::MissingFields(vec!["Name".to_string(), "Message".to_string()]);
        let view = ContactFormView::rejected(&form, &HashMap::new(), &error);

        assert_eq!(view.error, form.error_message);
        assert_eq!(view.error_detail, "Please fill in: Name, Message");
        assert!(!view.fields.is_empty());
    }

    #[test]
    fn test_accepted_hides_fields() {
        let form = FormContent::merge(None);
        let view = ContactFormView::accepted(&form);
        assert_eq!(view.success, form.success_message);
        assert!(view.fields.is_empty());
    }
}
