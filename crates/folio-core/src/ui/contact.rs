//! Contact form state and the `mailto:` link it produces.

use url::form_urlencoded;

use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Same rules as the HTML form: every field required, email shaped like
    /// `local@domain`.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_link(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&self.subject()),
            encode_component(&self.body())
        )
    }

    /// Validate and lock the form. Returns the link to open; the caller resets
    /// the form after [`CONTACT_RESET`](super::timing::CONTACT_RESET).
    pub fn submit(&mut self, recipient: &str) -> Result<String, FormError> {
        self.validate()?;
        self.submitting = true;
        Ok(self.mailto_link(recipient))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Marks that form encoding escapes but a URI component leaves literal.
const COMPONENT_SAFE: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%7E", "~"),
];

/// Percent-encode for a URI component. Form encoding writes spaces as `+`,
/// which mail clients show literally, so those become `%20`. A literal `%`
/// is always written as `%25`, so restoring the safe marks cannot touch
/// escapes that came from the input.
fn encode_component(value: &str) -> String {
    let encoded = form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    COMPONENT_SAFE
        .into_iter()
        .fold(encoded, |acc, (escaped, mark)| acc.replace(escaped, mark))
}
