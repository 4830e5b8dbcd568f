use async_trait::async_trait;

use super::{ContactForm, Payload, SubmitError};
use crate::core::config::ContactConfig;

/// Delivers a payload to the configured endpoint.
///
/// `?Send`: in the browser the request future is bound to the JS event loop.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<(), SubmitError>;
}

/// `reqwest` transport (fetch-backed on wasm32).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<(), SubmitError> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status.as_u16()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the message.
    Sent,
    /// No endpoint configured; open this `mailto:` URI instead.
    MailtoFallback(String),
}

/// Validate `form` and deliver it. Validation failures never reach the
/// transport.
pub async fn submit(
    form: &ContactForm,
    contact: &ContactConfig,
    transport: &impl ContactTransport,
) -> Result<SubmitOutcome, SubmitError> {
    let payload = form.payload()?;
    match contact.endpoint() {
        None => Ok(SubmitOutcome::MailtoFallback(payload.mailto_uri(contact))),
        Some(endpoint) => {
            transport.post_json(endpoint, &payload).await?;
            Ok(SubmitOutcome::Sent)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Invalid,
    /// Handed off to the mail client; delivery is not confirmed.
    HandedOff,
    Sent,
    Failed,
}

impl SubmitState {
    /// `(class, message slot)` for the feedback element, if it is visible.
    pub fn feedback(self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmitState::Invalid => Some(("alert alert-danger mt-2", "contact-required")),
            SubmitState::Sent => Some(("alert alert-success", "contact-success")),
            SubmitState::Failed => Some(("alert alert-danger", "contact-error")),
            SubmitState::Idle | SubmitState::Sending | SubmitState::HandedOff => None,
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmitState::Sending
    }
}

/// Fold a submission result into the form. Only a confirmed send clears the
/// fields, and only if they still hold the values that were `sent`; edits
/// made while the request was in flight are kept. Returns the settled state
/// and a URI to navigate to, if any.
pub fn settle(
    form: &mut ContactForm,
    sent: &ContactForm,
    result: Result<SubmitOutcome, SubmitError>,
) -> (SubmitState, Option<String>) {
    match result {
        Ok(SubmitOutcome::Sent) => {
            if form == sent {
                form.clear();
            }
            (SubmitState::Sent, None)
        }
        Ok(SubmitOutcome::MailtoFallback(uri)) => (SubmitState::HandedOff, Some(uri)),
        Err(SubmitError::MissingFields) => (SubmitState::Invalid, None),
        Err(err) => {
            tracing::error!("contact submission failed: {err}");
            (SubmitState::Failed, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    /// Records every call and answers with a canned result.
    struct FakeTransport {
        reply: Result<(), SubmitError>,
        calls: RefCell<Vec<(String, Payload)>>,
    }

    impl FakeTransport {
        fn replying(reply: Result<(), SubmitError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactTransport for FakeTransport {
        async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<(), SubmitError> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), payload.clone()));
            self.reply.clone()
        }
    }

    fn configured() -> ContactConfig {
        ContactConfig::default().with_endpoint("https://formspree.io/f/test")
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: " Carlos ".into(),
            email: "carlos@example.com".into(),
            subject: "Sumos".into(),
            message: "Olá!".into(),
        }
    }

    #[test]
    fn invalid_form_makes_no_call_and_no_navigation() {
        let transport = FakeTransport::replying(Ok(()));
        let mut form = valid_form();
        form.email = "  ".into();

        let sent = form.clone();
        let result = block_on(submit(&form, &configured(), &transport));
        assert_eq!(result, Err(SubmitError::MissingFields));
        assert!(transport.calls.borrow().is_empty());

        let (state, navigate) = settle(&mut form, &sent, result);
        assert_eq!(state, SubmitState::Invalid);
        assert_eq!(navigate, None);
        assert_eq!(state.feedback().map(|f| f.1), Some("contact-required"));
        assert_eq!(form.name, " Carlos ");
    }

    #[test]
    fn unconfigured_endpoint_hands_off_to_mailto() {
        let transport = FakeTransport::replying(Ok(()));
        let mut form = valid_form();

        let sent = form.clone();
        let result = block_on(submit(&form, &ContactConfig::default(), &transport));
        assert!(transport.calls.borrow().is_empty());

        let (state, navigate) = settle(&mut form, &sent, result);
        assert_eq!(state, SubmitState::HandedOff);
        assert_eq!(state.feedback(), None);
        let uri = navigate.expect("mailto uri");
        assert_eq!(
            uri,
            "mailto:comercial@ldcbusiness.co.mz?subject=Sumos\
             &body=Name%3A%20Carlos%0AEmail%3A%20carlos%40example.com%0A%0AOl%C3%A1%21"
        );
    }

    #[test]
    fn successful_post_clears_the_form() {
        let transport = FakeTransport::replying(Ok(()));
        let mut form = valid_form();

        let sent = form.clone();
        let result = block_on(submit(&form, &configured(), &transport));
        assert_eq!(result, Ok(SubmitOutcome::Sent));

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://formspree.io/f/test");
        assert_eq!(calls[0].1.name, "Carlos");

        let (state, navigate) = settle(&mut form, &sent, result);
        assert_eq!(state, SubmitState::Sent);
        assert_eq!(navigate, None);
        assert_eq!(state.feedback(), Some(("alert alert-success", "contact-success")));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn error_status_keeps_values_and_reports_failure() {
        let transport = FakeTransport::replying(Err(SubmitError::Status(422)));
        let mut form = valid_form();

        let sent = form.clone();
        let result = block_on(submit(&form, &configured(), &transport));
        assert_eq!(result, Err(SubmitError::Status(422)));

        let (state, _) = settle(&mut form, &sent, result);
        assert_eq!(state, SubmitState::Failed);
        assert_eq!(state.feedback(), Some(("alert alert-danger", "contact-error")));
        assert_eq!(form, valid_form());
    }

    #[test]
    fn transport_error_is_treated_like_a_bad_status() {
        let transport = FakeTransport::replying(Err(SubmitError::Transport("offline".into())));
        let mut form = valid_form();

        let sent = form.clone();
        let result = block_on(submit(&form, &configured(), &transport));
        let (state, _) = settle(&mut form, &sent, result);
        assert_eq!(state, SubmitState::Failed);
        assert_eq!(form, valid_form());
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[test]
    fn edits_made_while_sending_survive_success() {
        let transport = FakeTransport::replying(Ok(()));
        let mut form = valid_form();

        let sent = form.clone();
        let result = block_on(submit(&sent, &configured(), &transport));
        form.message.push_str(" Mais uma coisa.");

        let (state, _) = settle(&mut form, &sent, result);
        assert_eq!(state, SubmitState::Sent);
        assert_eq!(form.message, "Olá! Mais uma coisa.");
    }

    #[test]
    fn only_sending_is_busy() {
        assert!(SubmitState::Sending.is_busy());
        assert!(!SubmitState::Failed.is_busy());
        assert_eq!(SubmitState::Sending.feedback(), None);
    }
}
