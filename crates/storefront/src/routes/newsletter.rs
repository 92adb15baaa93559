//! Newsletter subscription route handler.
//!
//! Signups are validated and handed to the submission sink. The response
//! is a fragment that replaces the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sayura_core::Email;
use serde::Deserialize;
use tracing::instrument;

use crate::content::defaults::NEWSLETTER_SUCCESS;
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Form fragment in its success or error state.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/newsletter.html")]
pub struct NewsletterTemplate {
    pub success: String,
    pub error: String,
    pub email: String,
}

/// Subscribe to the newsletter.
#[instrument(skip(state, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> Result<Response> {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            tracing::debug!(error = %e, "Newsletter signup rejected");
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                NewsletterTemplate {
                    success: String::new(),
                    error: "Please enter a valid email address.".to_string(),
                    email: form.email.trim().to_string(),
                },
            )
                .into_response());
        }
    };

    add_breadcrumb("newsletter", "Newsletter signup", None);
    state.submissions().newsletter(&email).await?;

    Ok(NewsletterTemplate {
        success: NEWSLETTER_SUCCESS.to_string(),
        error: String::new(),
        email: email.to_string(),
    }
    .into_response())
}
