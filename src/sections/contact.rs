use std::mem;

use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::toast::{use_toaster, ToastKind};
use crate::config;
use crate::hooks::in_view::use_in_view;
use crate::routing::scroll_spy::Section;

pub const SUBMITTED_MESSAGE: &str =
    "Consultation request submitted! We will contact you within 24 hours.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationType {
    #[default]
    InPerson,
    Virtual,
}

impl ConsultationType {
    pub fn value(self) -> &'static str {
        match self {
            ConsultationType::InPerson => "in-person",
            ConsultationType::Virtual => "virtual",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "in-person" => Some(ConsultationType::InPerson),
            "virtual" => Some(ConsultationType::Virtual),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ConsultationType::InPerson => "In-Person Consultation",
            ConsultationType::Virtual => "Virtual Consultation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    ConsultationType,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::ConsultationType => "Consultation Type",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// The consultation form's values. Serialized as the request payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub consultation_type: ConsultationType,
    pub message: String,
}

impl ConsultationRequest {
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::ConsultationType => {
                if let Some(kind) = ConsultationType::from_value(value) {
                    self.consultation_type = kind;
                }
            }
            Field::Message => self.message = value.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Phone, &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field.label()));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Takes the values out of a valid form, leaving it at its defaults.
    /// An invalid form is left untouched.
    pub fn submit(&mut self) -> Result<ConsultationRequest, FormError> {
        self.validate()?;
        Ok(mem::take(self))
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Runs one submission against the form. There is no backend: the
/// request is logged and the visitor is told it went through.
pub fn handle_submission(
    form: &mut ConsultationRequest,
    mut notify: impl FnMut(ToastKind, String),
) -> Option<ConsultationRequest> {
    match form.submit() {
        Ok(request) => {
            match serde_json::to_string(&request) {
                Ok(json) => log::info!("Consultation request: {}", json),
                Err(err) => log::warn!("Failed to serialize consultation request: {}", err),
            }
            notify(ToastKind::Success, SUBMITTED_MESSAGE.to_string());
            Some(request)
        }
        Err(err) => {
            log::debug!("Consultation form rejected: {}", err);
            notify(ToastKind::Error, err.to_string());
            None
        }
    }
}

struct ContactLine {
    icon: Icon,
    title: &'static str,
    lines: &'static [&'static str],
    note: Option<&'static str>,
}

const CONTACT_LINES: [ContactLine; 4] = [
    ContactLine {
        icon: Icon::Phone,
        title: "Phone",
        lines: &[config::PHONE],
        note: Some("Call us for immediate assistance"),
    },
    ContactLine {
        icon: Icon::Mail,
        title: "Email",
        lines: &[config::EMAIL],
        note: Some("We'll respond within 24 hours"),
    },
    ContactLine {
        icon: Icon::MapPin,
        title: "Location",
        lines: &config::ADDRESS_LINES,
        note: None,
    },
    ContactLine {
        icon: Icon::Clock,
        title: "Office Hours",
        lines: &config::OFFICE_HOURS,
        note: None,
    },
];

const OFFER_POINTS: [&str; 3] = [
    "Personalized treatment plan",
    "No obligation consultation",
    "Meet Dr. Obayemi",
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let toaster = use_toaster();
    let form = use_state(ConsultationRequest::default);
    let body = use_node_ref();
    let in_view = use_in_view(body.clone(), "-100px");

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, &input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(Field::Message, &input.value());
            form.set(next);
        })
    };

    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(Field::ConsultationType, &select.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut current = (*form).clone();
            let sent = handle_submission(&mut current, |kind, message| match kind {
                ToastKind::Success => toaster.success(message),
                ToastKind::Error => toaster.error(message),
            });
            if sent.is_some() {
                form.set(current);
            }
        })
    };

    html! {
        <section id={Section::Contact.anchor()} class="contact section-light">
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .contact-form-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 2.5rem;
                    box-shadow: 0 20px 50px rgba(10, 22, 40, 0.08);
                }
                .contact-form-card h3,
                .contact-info h3 {
                    color: #0a1628;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1.25rem;
                }
                .form-field label {
                    color: #0a1628;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    padding: 0.8rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    font: inherit;
                    transition: border-color 0.2s ease;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #d4af37;
                }
                .contact-form-card .btn-gold {
                    width: 100%;
                }
                .form-disclaimer {
                    margin-top: 1rem;
                    text-align: center;
                    font-size: 0.8rem;
                    color: #6b7280;
                }
                .contact-line {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.75rem;
                }
                .contact-line .icon {
                    flex-shrink: 0;
                    width: 48px;
                    height: 48px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #0a1628;
                }
                .contact-line h4 {
                    color: #0a1628;
                    margin-bottom: 0.25rem;
                }
                .contact-line p {
                    color: #4b5563;
                }
                .contact-line .note {
                    font-size: 0.85rem;
                    color: #9ca3af;
                }
                .offer-panel {
                    background: linear-gradient(135deg, #0a1628 0%, #1a2942 100%);
                    color: #ffffff;
                    border-radius: 12px;
                    padding: 2rem;
                }
                .offer-panel h4 {
                    color: #d4af37;
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }
                .offer-panel p {
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 1rem;
                }
                .offer-panel ul {
                    list-style: none;
                    padding: 0;
                }
                .offer-panel li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                }
                .offer-panel li::before {
                    content: '';
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #d4af37;
                }
                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header">
                    <span class="section-eyebrow">{"Contact Us"}</span>
                    <h2 class="section-title">{"Schedule Your Consultation"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lede">
                        {"Take the first step towards your transformation. Free consultations available both \
                          in-person and virtually."}
                    </p>
                </div>

                <div ref={body} class={classes!("contact-grid", "reveal", in_view.then_some("revealed"))}>
                    <div class="contact-form-card">
                        <h3>{"Request a Consultation"}</h3>
                        <form onsubmit={on_submit}>
                            <div class="form-field">
                                <label for="name">{"Full Name *"}</label>
                                <input id="name" name="name" required=true placeholder="John Doe"
                                    value={form.name.clone()} oninput={on_input(Field::Name)} />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email Address *"}</label>
                                <input id="email" name="email" type="email" required=true placeholder="john@example.com"
                                    value={form.email.clone()} oninput={on_input(Field::Email)} />
                            </div>
                            <div class="form-field">
                                <label for="phone">{"Phone Number *"}</label>
                                <input id="phone" name="phone" type="tel" required=true placeholder="(555) 123-4567"
                                    value={form.phone.clone()} oninput={on_input(Field::Phone)} />
                            </div>
                            <div class="form-field">
                                <label for="consultationType">{"Consultation Type *"}</label>
                                <select id="consultationType" name="consultationType" onchange={on_type}>
                                    { for [ConsultationType::InPerson, ConsultationType::Virtual].into_iter().map(|kind| html! {
                                        <option value={kind.value()} selected={form.consultation_type == kind}>
                                            {kind.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea id="message" name="message" rows="4"
                                    placeholder="Tell us about your goals and any questions you have..."
                                    value={form.message.clone()} oninput={on_message} />
                            </div>
                            <button type="submit" class="btn-gold">{"Submit Request"}</button>
                            <p class="form-disclaimer">
                                {format!("By submitting this form, you agree to be contacted by {}.", config::PRACTICE_NAME)}
                            </p>
                        </form>
                    </div>

                    <div class="contact-info">
                        <h3>{"Get In Touch"}</h3>
                        { for CONTACT_LINES.iter().map(|line| html! {
                            <div class="contact-line">
                                <IconGlyph icon={line.icon} />
                                <div>
                                    <h4>{line.title}</h4>
                                    { for line.lines.iter().map(|text| html! { <p>{*text}</p> }) }
                                    if let Some(note) = line.note {
                                        <p class="note">{note}</p>
                                    }
                                </div>
                            </div>
                        }) }

                        <div class="offer-panel">
                            <h4>{"Free Consultation Offer"}</h4>
                            <p>
                                {"Schedule your complimentary consultation today and take the first step towards \
                                  achieving your aesthetic goals. Virtual and in-person options available."}
                            </p>
                            <ul>
                                { for OFFER_POINTS.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConsultationRequest {
        let mut form = ConsultationRequest::default();
        form.set(Field::Name, "Jane Doe");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Phone, "(555) 000-1111");
        form
    }

    #[test]
    fn valid_submission_resets_and_notifies_once() {
        let mut form = filled();
        form.set(Field::ConsultationType, "virtual");
        form.set(Field::Message, "Rhinoplasty questions");

        let mut notes = Vec::new();
        let sent = handle_submission(&mut form, |kind, message| notes.push((kind, message)));

        assert_eq!(form, ConsultationRequest::default());
        assert_eq!(form.consultation_type, ConsultationType::InPerson);
        assert_eq!(notes, vec![(ToastKind::Success, SUBMITTED_MESSAGE.to_string())]);
        let sent = sent.expect("valid form is sent");
        assert_eq!(sent.name, "Jane Doe");
        assert_eq!(sent.consultation_type, ConsultationType::Virtual);
    }

    #[test]
    fn missing_required_field_leaves_the_form_untouched() {
        for field in [Field::Name, Field::Email, Field::Phone] {
            let mut form = filled();
            form.set(field, "   ");
            let before = form.clone();
            assert_eq!(form.submit(), Err(FormError::MissingField(field.label())));
            assert_eq!(form, before);
        }
    }

    #[test]
    fn message_is_optional() {
        let mut form = filled();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["jane", "jane@", "@example.com", "jane@example", "jane@example.", "ja ne@example.com"] {
            let mut form = filled();
            form.set(Field::Email, email);
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn rejected_submission_raises_one_error_toast() {
        let mut form = ConsultationRequest::default();
        let mut notes = Vec::new();
        assert!(handle_submission(&mut form, |kind, message| notes.push((kind, message))).is_none());
        assert_eq!(notes, vec![(ToastKind::Error, "Full Name is required".to_string())]);
    }

    #[test]
    fn unknown_consultation_type_is_ignored() {
        let mut form = filled();
        form.set(Field::ConsultationType, "carrier-pigeon");
        assert_eq!(form.consultation_type, ConsultationType::InPerson);
    }

    #[test]
    fn payload_uses_camel_case_and_kebab_case_type() {
        let json = serde_json::to_value(filled()).expect("serializes");
        assert_eq!(json["consultationType"], "in-person");
        assert_eq!(json["name"], "Jane Doe");
    }
}
