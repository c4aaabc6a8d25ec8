use log::debug;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content;

/// What the visitor has typed so far. The form has no endpoint, so this
/// only ever reaches the console.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_state(ContactDraft::default);

    let update = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_name = update(|d, v| d.name = v);
    let on_email = update(|d, v| d.email = v);
    let on_subject = update(|d, v| d.subject = v);
    let on_message = update(|d, v| d.message = v);

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = serde_json::to_string(&*draft).unwrap_or_default();
            debug!("Contact form submitted, no endpoint configured: {}", payload);
        })
    };

    html! {
        <section id="contact" class="page-section tinted">
            <div class="container">
                <h2 class="section-title">{"Contact "}<span class="accent">{"Us"}</span></h2>
                <div class="two-column contact-layout">
                    <div>
                        <h3 class="subsection-title">{"Get In Touch"}</h3>
                        <p class="body-text">
                            {"Have questions about our warehouse management solutions or interested in them? Our team is here to help. Fill out the form or contact us directly using the information below."}
                        </p>
                        <div class="contact-details">
                            {
                                for content::CONTACT_DETAILS.iter().map(|detail| html! {
                                    <div class="contact-detail" key={detail.label}>
                                        <span class="contact-icon">{detail.icon}</span>
                                        <div>
                                            <h4>{detail.label}</h4>
                                            <p>{detail.value}</p>
                                        </div>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                    <div class="contact-form-card">
                        <form onsubmit={onsubmit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="name">{"Name"}</label>
                                    <input
                                        id="name"
                                        type="text"
                                        placeholder="Your name"
                                        value={draft.name.clone()}
                                        oninput={move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            on_name.emit(input.value());
                                        }}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email"}</label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder="Your email"
                                        value={draft.email.clone()}
                                        oninput={move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            on_email.emit(input.value());
                                        }}
                                    />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="subject">{"Subject"}</label>
                                <input
                                    id="subject"
                                    type="text"
                                    placeholder="Subject"
                                    value={draft.subject.clone()}
                                    oninput={move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        on_subject.emit(input.value());
                                    }}
                                />
                            </div>
                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea
                                    id="message"
                                    placeholder="Your message"
                                    value={draft.message.clone()}
                                    oninput={move |e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        on_message.emit(input.value());
                                    }}
                                />
                            </div>
                            <button type="submit" class="cta-button full-width">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-details > * + * {
                    margin-top: 1rem;
                }
                .contact-detail {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .contact-icon {
                    font-size: 1.5rem;
                    color: #22d3ee;
                }
                .contact-detail h4 {
                    font-weight: 700;
                }
                .contact-detail p {
                    color: #d1d5db;
                }
                .contact-form-card {
                    background: rgba(17, 24, 39, 0.5);
                    padding: 2rem;
                    border-radius: 0.5rem;
                    border: 1px solid #1f2937;
                }
                .contact-form-card form > * + * {
                    margin-top: 1.5rem;
                }
                .form-row {
                    display: grid;
                    gap: 1rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 0.75rem;
                    background: #1f2937;
                    border: 1px solid #374151;
                    border-radius: 0.375rem;
                    color: white;
                    font: inherit;
                }
                .form-field textarea {
                    min-height: 150px;
                }
                .full-width {
                    width: 100%;
                }
                @media (min-width: 768px) {
                    .form-row { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_every_field() {
        let draft = ContactDraft {
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            subject: "Robots".to_string(),
            message: "How fast does it sort?".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["email"], "amina@example.com");
        assert_eq!(json["message"], "How fast does it sort?");
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }
}
