//! Document-level styling derived from the active theme.
//!
//! The store never touches a renderer directly. On every transition it builds a
//! [`DocumentStyle`] and hands it to a [`StyleAdapter`]; the site's adapter
//! writes it into a signal read by the themed root element.

use std::fmt::Write as _;

use super::ThemeName;

/// Custom properties written on every transition, in write order.
pub const CUSTOM_PROPERTIES: [&str; 7] = [
    "--background",
    "--background-alt",
    "--foreground",
    "--accent",
    "--gradient-from",
    "--gradient-to",
    "--nav-scrolled-bg",
];

/// Class list of the global element carrying the theme marker.
///
/// Non-theme classes are preserved across [`ThemeClassList::retag`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeClassList {
    classes: Vec<String>,
}

impl ThemeClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing `class` attribute value.
    pub fn parse(attr: &str) -> Self {
        Self {
            classes: attr.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Remove every known theme marker and add the one for `theme`.
    pub fn retag(&mut self, theme: ThemeName) {
        self.classes
            .retain(|c| !ThemeName::all().iter().any(|t| t.css_class() == c));
        self.classes.push(theme.css_class().to_string());
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Theme markers currently present.
    pub fn theme_markers(&self) -> Vec<ThemeName> {
        ThemeName::all()
            .iter()
            .copied()
            .filter(|t| self.contains(t.css_class()))
            .collect()
    }

    /// Space-separated `class` attribute value.
    pub fn to_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// Global presentation state for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
    pub theme: ThemeName,
    /// `(name, value)` pairs, see [`CUSTOM_PROPERTIES`].
    pub properties: Vec<(&'static str, &'static str)>,
    pub body_background: &'static str,
    pub body_foreground: &'static str,
    pub classes: ThemeClassList,
}

impl DocumentStyle {
    /// Build the style for `theme` on top of an existing class list.
    pub fn new(theme: ThemeName, mut classes: ThemeClassList) -> Self {
        let p = theme.palette();
        classes.retag(theme);

        let values = [
            p.background,
            p.background_alt,
            p.foreground,
            p.accent,
            p.gradient_from,
            p.gradient_to,
            p.nav_scrolled_background,
        ];

        Self {
            theme,
            properties: CUSTOM_PROPERTIES.into_iter().zip(values).collect(),
            body_background: p.background,
            body_foreground: p.foreground,
            classes,
        }
    }

    pub fn for_theme(theme: ThemeName) -> Self {
        Self::new(theme, ThemeClassList::new())
    }

    /// Value of a custom property, if written.
    pub fn property(&self, name: &str) -> Option<&'static str> {
        self.properties
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }

    /// Inline `style` attribute: custom properties followed by the body pair.
    pub fn inline_style(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.properties {
            let _ = write!(out, "{name}: {value}; ");
        }
        let _ = write!(
            out,
            "background-color: {}; color: {};",
            self.body_background, self.body_foreground
        );
        out
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::for_theme(ThemeName::Default)
    }
}

/// Receives the document style after every theme transition.
pub trait StyleAdapter {
    fn apply(&mut self, style: &DocumentStyle);
}

impl<F> StyleAdapter for F
where
    F: FnMut(&DocumentStyle),
{
    fn apply(&mut self, style: &DocumentStyle) {
        self(style)
    }
}

/// Adapter that discards styles, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStyle;

impl StyleAdapter for NoopStyle {
    fn apply(&mut self, _style: &DocumentStyle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retag_replaces_marker() {
        let mut classes = ThemeClassList::parse("antialiased theme-light");
        classes.retag(ThemeName::Velvet);
        assert_eq!(classes.theme_markers(), vec![ThemeName::Velvet]);
        assert!(classes.contains("antialiased"));
        assert_eq!(classes.to_attr(), "antialiased theme-velvet");
    }

    #[test]
    fn test_retag_removes_duplicates() {
        let mut classes = ThemeClassList::parse("theme-olive theme-default theme-olive");
        classes.retag(ThemeName::Olive);
        assert_eq!(classes.to_attr(), "theme-olive");
    }

    #[test]
    fn test_style_properties_follow_palette() {
        let style = DocumentStyle::for_theme(ThemeName::Olive);
        let p = ThemeName::Olive.palette();
        assert_eq!(style.property("--background"), Some(p.background));
        assert_eq!(style.property("--accent"), Some(p.accent));
        assert_eq!(style.property("--nav-scrolled-bg"), Some(p.nav_scrolled_background));
        assert_eq!(style.properties.len(), CUSTOM_PROPERTIES.len());
        assert_eq!(style.body_background, p.background);
        assert_eq!(style.body_foreground, p.foreground);
    }

    #[test]
    fn test_inline_style() {
        let style = DocumentStyle::for_theme(ThemeName::Default);
        let inline = style.inline_style();
        assert!(inline.starts_with("--background: #0a0a0a; "));
        assert!(inline.ends_with("background-color: #0a0a0a; color: #ededed;"));
    }

    #[test]
    fn test_closure_adapter() {
        let mut seen = Vec::new();
        {
            let mut adapter = |s: &DocumentStyle| seen.push(s.theme);
            adapter.apply(&DocumentStyle::for_theme(ThemeName::Light));
        }
        assert_eq!(seen, vec![ThemeName::Light]);
    }
}
