//! Contact cards and the mail form.
//!
//! Submitting validates the fields, hands a prefilled `mailto:` link to the
//! system mail client and clears the form shortly after.

use dioxus::prelude::*;
use folio_core::ui::timing::CONTACT_RESET;
use folio_core::ui::ContactForm;
use folio_core::{FormError, Palette};
use tokio::time::sleep;

use crate::links;
use crate::site::use_site;
use crate::theme::use_theme;

use super::heading::LetterHeading;
use super::icons::social_glyph;

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let profile = &site.content.profile;
    let mut form = use_signal(ContactForm::default);
    let mut error = use_signal(|| None::<FormError>);

    let muted = Palette::tint(palette.foreground, "80");
    let label_color = Palette::tint(palette.foreground, "60");
    let card_background = Palette::tint(palette.background_alt, "60");
    let card_border = Palette::tint(palette.foreground, "15");
    let input_border = Palette::tint(palette.foreground, "20");
    let input_style = format!(
        "background-color: transparent; border-color: {}; color: {};",
        input_border, palette.foreground
    );
    let label_style = format!(
        "color: {}; background-color: {};",
        label_color, palette.background_alt
    );
    let fields = form.read().clone();
    let submitting = fields.is_submitting();
    let recipient = profile.email.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit(&recipient);
        match result {
            Ok(link) => {
                error.set(None);
                tracing::info!("Opening mail client for contact form");
                links::open_external(&link);
                spawn(async move {
                    sleep(site.delay(CONTACT_RESET)).await;
                    form.write().reset();
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                error.set(Some(e));
            }
        }
    };

    rsx! {
        section {
            id: "contact",
            class: "contact",
            style: "background-color: {palette.background};",

            div {
                class: "contact-header",
                LetterHeading { text: "Get in touch", color: "{palette.foreground}", class: "contact-title" }
                p { class: "contact-subtitle", style: "color: {muted};", "Contact Me" }
            }

            div {
                class: "contact-columns",

                div {
                    class: "contact-methods fade-up",
                    h2 { style: "color: {palette.foreground};", "Say Hello!" }
                    for method in profile.contact_methods.iter() {
                        button {
                            key: "{method.name}",
                            class: "contact-card",
                            style: "background-color: {card_background}; border-color: {card_border};",
                            onclick: {
                                let href = method.href.clone();
                                move |_| links::open_external(&href)
                            },
                            span { class: "contact-card-icon", style: "color: {palette.accent};", "{social_glyph(&method.name)}" }
                            div {
                                class: "contact-card-text",
                                h3 { style: "color: {palette.foreground};", "{method.name}" }
                                p { style: "color: {muted};", "{method.value}" }
                            }
                            span { class: "contact-card-action", style: "color: {palette.accent};", "Write →" }
                        }
                    }
                }

                div {
                    class: "contact-form-column fade-up",
                    h2 { style: "color: {palette.foreground};", "Connect with me" }
                    form {
                        class: "contact-form",
                        onsubmit: handle_submit,

                        div {
                            class: "field",
                            label { r#for: "name", style: "{label_style}", "Name" }
                            input {
                                id: "name",
                                name: "name",
                                r#type: "text",
                                placeholder: "Insert your Name",
                                style: "{input_style}",
                                value: "{fields.name}",
                                oninput: move |evt| form.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "email", style: "{label_style}", "Email" }
                            input {
                                id: "email",
                                name: "email",
                                r#type: "email",
                                placeholder: "Insert your Email",
                                style: "{input_style}",
                                value: "{fields.email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "message", style: "{label_style}", "Message" }
                            textarea {
                                id: "message",
                                name: "message",
                                rows: "6",
                                placeholder: "Write your message",
                                style: "{input_style}",
                                value: "{fields.message}",
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                        }

                        if let Some(e) = error() {
                            p { class: "form-error", role: "alert", style: "color: {palette.accent};", "{e}" }
                        }

                        button {
                            class: "submit-button",
                            r#type: "submit",
                            disabled: submitting,
                            style: "background-color: {palette.foreground}; color: {palette.background};",
                            if submitting { "Sending..." } else { "Send Message ➤" }
                        }
                    }
                }
            }
        }
    }
}
