use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::CONTACT_RECIPIENT;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please type a message")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let email = self.email.trim();
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// `mailto:` link that opens the visitor's mail client with the message
    /// filled in.
    pub fn mailto_href(&self, recipient: &str) -> String {
        let subject = format!("Message from {}", self.name.trim());
        let body = format!("{}\n\nReply to: {}", self.message.trim(), self.email.trim());
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Email,
    TextArea,
}

struct Field {
    label: &'static str,
    kind: FieldKind,
    placeholder: &'static str,
}

const FIELDS: [Field; 3] = [
    Field {
        label: "Name",
        kind: FieldKind::Text,
        placeholder: "Enter your name",
    },
    Field {
        label: "Email",
        kind: FieldKind::Email,
        placeholder: "Enter your email",
    },
    Field {
        label: "Message",
        kind: FieldKind::TextArea,
        placeholder: "Type your message here",
    },
];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };

            if let Err(err) = draft.validate() {
                log::warn!("Contact form rejected: {:?}", err);
                error.set(Some(err.to_string()));
                sent.set(false);
                return;
            }

            let href = draft.mailto_href(CONTACT_RECIPIENT);
            match web_sys::window().map(|window| window.location().set_href(&href)) {
                Some(Ok(())) => {
                    log::info!("Opened mail client for contact message");
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    error.set(None);
                    sent.set(true);
                }
                Some(Err(err)) => {
                    log::error!("Failed to open mail client: {:?}", err);
                    error.set(Some(format!(
                        "Couldn't open your mail client. Write to {} instead.",
                        CONTACT_RECIPIENT
                    )));
                }
                None => {
                    log::error!("No window available for contact form");
                }
            }
        })
    };

    let fields = FIELDS.iter().map(|field| {
        let input = match field.kind {
            FieldKind::TextArea => {
                let message = message.clone();
                html! {
                    <textarea
                        class="contact-form__input"
                        rows="4"
                        placeholder={field.placeholder}
                        value={(*message).clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
                        })}
                    />
                }
            }
            FieldKind::Text | FieldKind::Email => {
                let (state, input_type) = if field.kind == FieldKind::Email {
                    (email.clone(), "email")
                } else {
                    (name.clone(), "text")
                };
                html! {
                    <input
                        class="contact-form__input"
                        type={input_type}
                        placeholder={field.placeholder}
                        value={(*state).clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
                        })}
                    />
                }
            }
        };

        html! {
            <Reveal key={field.label} offset_x={-50} offset_y={0}>
                <label class="contact-form__field">
                    <span class="contact-form__label">{field.label}</span>
                    {input}
                </label>
            </Reveal>
        }
    });

    html! {
        <section id="contact" class="contact">
            <div class="section-container">
                <Reveal>
                    <h3 class="section-title gradient-text">{"Get in Touch"}</h3>
                </Reveal>

                <Reveal class="contact-card" offset_y={0} from_scale={0.8}>
                    <form class="contact-form" {onsubmit}>
                        { for fields }

                        if let Some(err) = (*error).as_ref() {
                            <p class="contact-form__error" role="alert">{err.clone()}</p>
                        }
                        if *sent {
                            <p class="contact-form__sent">{"Thanks! Your mail client should now have the message ready to send."}</p>
                        }

                        <button type="submit" class="contact-form__submit">
                            {"Send Message"}
                        </button>
                    </form>
                </Reveal>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 6rem 0;
                }

                .contact-card {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-form__field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .contact-form__label {
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .contact-form__input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    font: inherit;
                    background: rgba(255, 255, 255, 0.2);
                    outline: none;
                }

                .contact-form__input::placeholder { color: rgba(255, 255, 255, 0.6); }
                .contact-form__input:focus { box-shadow: 0 0 0 2px #a855f7; }

                .contact-form__error {
                    margin: 0;
                    color: #fca5a5;
                }

                .contact-form__sent {
                    margin: 0;
                    color: #86efac;
                }

                .contact-form__submit {
                    width: 100%;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                    transition: transform 0.2s ease-out, box-shadow 0.2s ease-out;
                }

                .contact-form__submit:hover {
                    transform: scale(1.02);
                    box-shadow: 0 0 20px rgba(167, 139, 250, 0.5);
                }

                .contact-form__submit:active { transform: scale(0.98); }

                @media (max-width: 768px) {
                    .contact { padding: 3rem 0; }
                    .contact-card { padding: 1.5rem; }
                    .contact-form { gap: 1rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn accepts_complete_message() {
        assert_eq!(message("Ada", "ada@example.com", "Hi there").validate(), Ok(()));
        assert_eq!(
            message("  Ada ", " ada@mail.example.org ", "x").validate(),
            Ok(())
        );
    }

    #[test]
    fn reports_first_missing_field() {
        assert_eq!(message("", "", "").validate(), Err(ContactError::MissingName));
        assert_eq!(
            message("   ", "a@b.co", "hi").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            message("Ada", " ", "").validate(),
            Err(ContactError::MissingEmail)
        );
        assert_eq!(
            message("Ada", "ada@example.com", "\n\t").validate(),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in [
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@.com",
            "ada@example.",
            "ada@@example.com",
            "ada lovelace@example.com",
        ] {
            assert_eq!(
                message("Ada", email, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = message(" Ada ", "ada@example.com", "Hello & welcome\nBye")
            .mailto_href("team@example.com");
        assert_eq!(
            href,
            "mailto:team@example.com?subject=Message%20from%20Ada\
             &body=Hello%20%26%20welcome%0ABye%0A%0AReply%20to%3A%20ada%40example.com"
        );
    }

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(ContactError::MissingName.to_string(), "Please enter your name");
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "That email address doesn't look right"
        );
    }
}
