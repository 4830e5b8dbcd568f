//! Contact form: validation, delivery and the form section itself.
//!
//! Flow: `Idle -> (Invalid | Sending) -> (Sent | Failed | HandedOff)`. Any
//! settled state accepts a new submission. There is no automatic retry.

mod form;
mod submit;
mod view;

pub use form::{ContactForm, Payload};
pub use submit::{settle, submit, ContactTransport, HttpTransport, SubmitOutcome, SubmitState};
pub use view::ContactSection;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Name, email or message was blank after trimming.
    #[error("required fields missing")]
    MissingFields,
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("endpoint responded with HTTP {0}")]
    Status(u16),
}
