use gloo_net::http::Request;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::glass_card::GlassCard;
use crate::config;
use crate::i18n::context::use_language;

/// Fields of the contact form, as sent to the form relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> String {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .iter()
        .map(|(field, value)| format!("{}={}", field, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("the message was already sent")]
    AlreadySent,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("form relay answered with status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitState {
    /// Moves to `Sending`, refusing while a request is out or after success.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        match self {
            Self::Idle => {
                *self = Self::Sending;
                Ok(())
            }
            Self::Sending => Err(SubmitError::InFlight),
            Self::Sent => Err(SubmitError::AlreadySent),
        }
    }

    pub fn finish(&mut self, outcome: &Result<(), SubmitError>) {
        *self = match outcome {
            Ok(()) => Self::Sent,
            Err(_) => Self::Idle,
        };
    }

    pub fn locks_form(self) -> bool {
        self != Self::Idle
    }
}

pub async fn send_submission(submission: &ContactSubmission) -> Result<(), SubmitError> {
    let response = Request::post(config::FORM_ENDPOINT)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(submission.form_body())
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let language = use_language();
    let t = |key: &str| language.t(key);

    let form = use_state(ContactSubmission::default);
    let state = use_state_eq(SubmitState::default);
    // Source of truth for the in-flight check; `state` only drives rendering.
    let gate = use_mut_ref(SubmitState::default);

    let onsubmit = {
        let form = form.clone();
        let state = state.clone();
        let gate = gate.clone();
        let failed = t("contact.failed");
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                return;
            }
            if let Err(refused) = gate.borrow_mut().begin() {
                warn!("Ignoring submit: {}", refused);
                return;
            }
            state.set(SubmitState::Sending);

            let submission = (*form).clone();
            let form = form.clone();
            let state = state.clone();
            let gate = gate.clone();
            let failed = failed.clone();
            spawn_local(async move {
                let outcome = send_submission(&submission).await;
                gate.borrow_mut().finish(&outcome);
                state.set(*gate.borrow());
                match outcome {
                    Ok(()) => {
                        info!("Contact message sent");
                        form.set(ContactSubmission::default());
                    }
                    Err(e) => {
                        error!("Contact message failed: {}", e);
                        alert(&failed);
                    }
                }
            });
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let name = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(ContactSubmission {
                name,
                ..(*form).clone()
            });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let email = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(ContactSubmission {
                email,
                ..(*form).clone()
            });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(ContactSubmission {
                message,
                ..(*form).clone()
            });
        })
    };

    let locked = state.locks_form();
    let button_label = match *state {
        SubmitState::Idle => t("contact.sendButton"),
        SubmitState::Sending => t("contact.sendingButton"),
        SubmitState::Sent => t("contact.sentButton"),
    };

    html! {
        <section id="contact" class="section contact">
            <div class="container narrow">
                <GlassCard class="contact-card" hover_effect={false}>
                    <div class="contact-grid">
                        <div class="contact-info">
                            <h2 class="section-title">{ t("contact.title") }</h2>
                            <p class="muted">{ t("contact.description") }</p>
                            <ul class="contact-details">
                                <li><span class="icon-bubble cyan">{"⌖"}</span>{ t("contact.location") }</li>
                                <li>
                                    <span class="icon-bubble purple">{"✉"}</span>
                                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                                </li>
                            </ul>
                        </div>
                        <form class="contact-form" {onsubmit}>
                            <label>
                                <span>{ t("contact.nameLabel") }</span>
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    placeholder={t("contact.namePlaceholder")}
                                    value={form.name.clone()}
                                    oninput={on_name}
                                    disabled={locked}
                                />
                            </label>
                            <label>
                                <span>{ t("contact.emailLabel") }</span>
                                <input
                                    type="email"
                                    name="email"
                                    required=true
                                    placeholder={t("contact.emailPlaceholder")}
                                    value={form.email.clone()}
                                    oninput={on_email}
                                    disabled={locked}
                                />
                            </label>
                            <label>
                                <span>{ t("contact.messageLabel") }</span>
                                <textarea
                                    name="message"
                                    rows="4"
                                    required=true
                                    placeholder={t("contact.messagePlaceholder")}
                                    value={form.message.clone()}
                                    oninput={on_message}
                                    disabled={locked}
                                />
                            </label>
                            <button
                                type="submit"
                                class={classes!(
                                    "submit-button",
                                    (*state == SubmitState::Sent).then(|| "sent"),
                                    (*state == SubmitState::Sending).then(|| "sending"),
                                )}
                                disabled={locked}
                            >
                                { button_label }
                            </button>
                        </form>
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}
