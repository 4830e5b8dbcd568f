//! Contact form values, validation and the `mailto:` fallback.

use serde::Serialize;

use super::SubmitError;
use crate::core::config::ContactConfig;

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Trimmed, validated submission. Serializes to the JSON body Formspree
/// expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Trim every field and require name, email and message.
    pub fn payload(&self) -> Result<Payload, SubmitError> {
        let payload = Payload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if payload.name.is_empty() || payload.email.is_empty() || payload.message.is_empty() {
            return Err(SubmitError::MissingFields);
        }
        Ok(payload)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Payload {
    /// `mailto:` link that opens the visitor's mail client pre-filled.
    pub fn mailto_uri(&self, contact: &ContactConfig) -> String {
        let subject = if self.subject.is_empty() {
            contact.default_subject.as_str()
        } else {
            self.subject.as_str()
        };
        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            contact.fallback_address,
            urlencoding::encode(subject),
            urlencoding::encode(&body)
        )
    }
}
