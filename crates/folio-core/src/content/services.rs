//! Services carousel data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Typographic treatment of a service title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Light,
    Normal,
    #[default]
    Medium,
    Semibold,
    Bold,
    Italic,
}

impl FontStyle {
    /// Inline CSS for the title.
    pub fn css(&self) -> &'static str {
        match self {
            FontStyle::Light => "font-weight: 300;",
            FontStyle::Normal => "font-weight: 400;",
            FontStyle::Medium => "font-weight: 500;",
            FontStyle::Semibold => "font-weight: 600;",
            FontStyle::Bold => "font-weight: 700;",
            FontStyle::Italic => "font-weight: 400; font-style: italic;",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub number: String,
    /// Glyph key understood by the site's icon table.
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Option<String>,
    pub client_type: Option<String>,
    pub result: Option<String>,
    #[serde(default)]
    pub font_style: FontStyle,
}

pub(crate) fn validate(services: &[Service]) -> Result<(), ContentError> {
    let mut ids = HashSet::new();
    for service in services {
        if !ids.insert(service.id) {
            return Err(ContentError::invalid(format!(
                "duplicate service id {}",
                service.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn test_optional_fields() {
        let services = Content::embedded().unwrap().services;
        let perf = services.iter().find(|s| s.id == 4).unwrap();
        assert!(perf.tech.is_none());
        assert!(perf.client_type.is_none());
        assert_eq!(perf.font_style, FontStyle::Light);
    }

    #[test]
    fn test_missing_font_style_defaults_to_medium() {
        let json = r#"{"id":1,"number":"01","icon":"code","title":"t","subtitle":"s",
            "description":"d","features":[]}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.font_style, FontStyle::Medium);
        assert_eq!(service.font_style.css(), "font-weight: 500;");
    }

    #[test]
    fn test_duplicate_ids() {
        let mut services = Content::embedded().unwrap().services;
        services[1].id = services[0].id;
        assert!(validate(&services).is_err());
    }
}
