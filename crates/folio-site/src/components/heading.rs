use dioxus::prelude::*;
use folio_core::ui::timing::letter_delay;

/// Section heading revealed one letter at a time.
#[component]
pub fn LetterHeading(text: String, color: String, #[props(default)] class: String) -> Element {
    rsx! {
        h2 {
            class: "section-heading {class}",
            style: "color: {color};",
            "aria-label": "{text}",
            for (i, letter) in text.chars().enumerate() {
                span {
                    key: "{i}",
                    class: "heading-letter reveal-up",
                    style: "animation-delay: {letter_delay(i)};",
                    if letter == ' ' { "\u{a0}" } else { "{letter}" }
                }
            }
        }
    }
}
