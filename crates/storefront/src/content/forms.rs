//! Contact and newsletter form handling.
//!
//! Submissions are validated against the configured form fields and handed
//! to a [`SubmissionSink`]. The default [`LoggingSink`] only records them;
//! delivery (e-mail, CRM) plugs in behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use sayura_core::{Email, EmailError, FieldType};
use thiserror::Error;

use super::defaults::FormContent;

/// A validated contact form submission, fields in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub recipient: String,
    pub fields: Vec<(String, String)>,
}

impl ContactSubmission {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Why a contact submission was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactFormError {
    /// Labels of required fields left blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("{label}: {source}")]
    InvalidEmail {
        label: String,
        #[source]
        source: EmailError,
    },
}

/// Check `values` against the configured fields.
///
/// Values are trimmed. Unknown keys are ignored.
///
/// # Errors
///
/// Returns [`ContactFormError::MissingFields`] listing every blank required
/// field, or [`ContactFormError::InvalidEmail`] for a malformed e-mail field.
pub fn validate_contact(
    form: &FormContent,
    values: &HashMap<String, String>,
) -> Result<ContactSubmission, ContactFormError> {
    let mut missing = Vec::new();
    let mut fields = Vec::with_capacity(form.fields.len());

    for field in &form.fields {
        let value = values.get(&field.name).map_or("", |v| v.trim());
        if value.is_empty() {
            if field.required {
                missing.push(field.label.clone());
            }
            continue;
        }

        if field.field_type == FieldType::Email {
            let email = Email::parse(value).map_err(|source| ContactFormError::InvalidEmail {
                label: field.label.clone(),
                source,
            })?;
            fields.push((field.name.clone(), email.to_string()));
        } else {
            fields.push((field.name.clone(), value.to_string()));
        }
    }

    if !missing.is_empty() {
        return Err(ContactFormError::MissingFields(missing));
    }

    Ok(ContactSubmission {
        recipient: form.recipient_email.clone(),
        fields,
    })
}

/// Error raised by a sink that could not accept a submission.
#[derive(Debug, Error)]
#[error("submission sink failed: {0}")]
pub struct SinkError(pub String);

/// Destination for accepted form submissions.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn contact(&self, submission: &ContactSubmission) -> Result<(), SinkError>;

    async fn newsletter(&self, email: &Email) -> Result<(), SinkError>;
}

/// Records submissions in the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn contact(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
        tracing::info!(
            recipient = %submission.recipient,
            from = submission.get("email").unwrap_or_default(),
            subject = submission.get("subject").unwrap_or_default(),
            fields = submission.fields.len(),
            "Contact form submitted"
        );
        Ok(())
    }

    async fn newsletter(&self, email: &Email) -> Result<(), SinkError> {
        tracing::info!(domain = %email.domain(), "Newsletter signup");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> FormContent {
        FormContent::merge(None)
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_valid_submission_skips_optional_blank() {
        let submission = validate_contact(
            &form(),
            &values(&[
                ("name", " Asha "),
                ("email", "Asha@Example.com"),
                ("phone", ""),
                ("subject", "Sizing"),
                ("message", "Do you stock XS?"),
            ]),
        )
        .unwrap();

        assert_eq!(submission.get("name"), Some("Asha"));
        assert_eq!(submission.get("email"), Some("asha@example.com"));
        assert_eq!(submission.get("phone"), None);
        assert_eq!(submission.recipient, "hello@sayura.in");
    }

    #[test]
    fn test_missing_fields_listed_by_label() {
        let err = validate_contact(&form(), &values(&[("name", "Asha")])).unwrap_err();
        assert_eq!(
            err,
            ContactFormError::MissingFields(vec![
                "Email".to_string(),
                "Subject".to_string(),
                "Message".to_string(),
            ])
        );
    }

    #[test]
    fn test_invalid_email() {
        let err = validate_contact(
            &form(),
            &values(&[
                ("name", "Asha"),
                ("email", "asha-at-example"),
                ("subject", "Hi"),
                ("message", "Hello"),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, ContactFormError::InvalidEmail { .. }));
    }

    #[tokio::test]
    async fn test_logging_sink_accepts() {
        let email = Email::parse("reader@sayura.in").unwrap();
        assert!(LoggingSink.newsletter(&email).await.is_ok());
    }
}
