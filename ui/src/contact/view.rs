use dioxus::prelude::*;

use super::{settle, submit, ContactForm, HttpTransport, SubmitState};
use crate::components::{use_localization, Localized, Reveal};
use crate::core::{config, platform};

#[component]
pub fn ContactSection() -> Element {
    let loc = use_localization();
    let mut form = use_signal(ContactForm::default);
    let mut state = use_signal(SubmitState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if state().is_busy() {
            return;
        }
        let snapshot = form();
        state.set(SubmitState::Sending);
        spawn(async move {
            let result = submit(&snapshot, &config::site().contact, &HttpTransport::default()).await;
            let (next, handoff) = form.with_mut(|f| settle(f, &snapshot, result));
            state.set(next);
            if let Some(uri) = handoff {
                platform::navigate(&uri);
            }
        });
    };

    let values = form();
    let busy = state().is_busy();
    let feedback = state().feedback().map(|(class, slot)| (class, loc.read().text(slot).to_string()));

    rsx! {
        section { id: "contato", class: "section section-contact",
            Reveal { id: "contact-title",
                h2 { Localized { slot: "contact-title" } }
            }
            Reveal { id: "contact-body",
                form {
                    id: "contact-form",
                    onsubmit,
                    div { class: "form-row",
                        label { r#for: "name", Localized { slot: "contact-name" } }
                        input {
                            id: "name",
                            name: "name",
                            r#type: "text",
                            value: "{values.name}",
                            readonly: busy,
                            oninput: move |e| form.with_mut(|f| f.name = e.value()),
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "email", Localized { slot: "contact-email" } }
                        input {
                            id: "email",
                            name: "email",
                            r#type: "email",
                            value: "{values.email}",
                            readonly: busy,
                            oninput: move |e| form.with_mut(|f| f.email = e.value()),
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "subject", Localized { slot: "contact-subject" } }
                        input {
                            id: "subject",
                            name: "subject",
                            r#type: "text",
                            value: "{values.subject}",
                            readonly: busy,
                            oninput: move |e| form.with_mut(|f| f.subject = e.value()),
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "message", Localized { slot: "contact-message" } }
                        textarea {
                            id: "message",
                            name: "message",
                            rows: 5,
                            value: "{values.message}",
                            readonly: busy,
                            oninput: move |e| form.with_mut(|f| f.message = e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: busy,
                        Localized { slot: "contact-send" }
                    }
                    if let Some((class, message)) = feedback {
                        div { id: "contact-feedback", class: "{class}", role: "status", "{message}" }
                    } else {
                        div { id: "contact-feedback", style: "display:none" }
                    }
                }
            }
        }
    }
}
