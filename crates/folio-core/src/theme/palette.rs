//! Static palette table.

use super::ThemeName;

/// Resolved presentation values for one theme.
///
/// Colors are CSS color strings; gradients are full CSS `linear-gradient(...)`
/// values so views can drop them straight into a `style` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub background_alt: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub nav_background: &'static str,
    pub nav_scrolled_background: &'static str,
    pub background_gradient: &'static str,
    pub text_gradient: &'static str,
    pub button_border: &'static str,
    pub menu_layer_primary: &'static str,
    pub menu_layer_secondary: &'static str,
    pub menu_layer_tertiary: &'static str,
}

const DEFAULT: Palette = Palette {
    background: "#0a0a0a",
    background_alt: "#121212",
    foreground: "#ededed",
    accent: "#00b4d8",
    gradient_from: "#ffffff",
    gradient_to: "#a1a1aa",
    nav_background: "transparent",
    nav_scrolled_background: "rgba(10, 10, 10, 0.8)",
    background_gradient: "linear-gradient(to bottom right, #262626, #000000, #171717)",
    text_gradient: "linear-gradient(to bottom, #ffffff, #e5e5e5, #262626)",
    button_border: "#737373",
    menu_layer_primary: "#ffffff",
    menu_layer_secondary: "#6b7280",
    menu_layer_tertiary: "#0a0a0a",
};

const LIGHT: Palette = Palette {
    background: "#f5f5f5",
    background_alt: "#e5e7eb",
    foreground: "#121212",
    accent: "#2563eb",
    gradient_from: "#121212",
    gradient_to: "#52525b",
    nav_background: "transparent",
    nav_scrolled_background: "rgba(245, 245, 245, 0.8)",
    background_gradient: "linear-gradient(to bottom right, #eff6ff, #f3f4f6, #e0f2fe)",
    text_gradient: "linear-gradient(to bottom, #1e3a8a, #1f2937, #3b82f6)",
    button_border: "#3b82f6",
    menu_layer_primary: "#bfdbfe",
    menu_layer_secondary: "#93c5fd",
    menu_layer_tertiary: "#f5f5f5",
};

const OLIVE: Palette = Palette {
    background: "#3b4a3f",
    background_alt: "#4a634f",
    foreground: "#f1f5f2",
    accent: "#a3b97b",
    gradient_from: "#4e5f52",
    gradient_to: "#3b4a3f",
    nav_background: "transparent",
    nav_scrolled_background: "rgba(59, 74, 63, 0.85)",
    background_gradient: "linear-gradient(to bottom right, #556b57, #3e5142, #2f3e34)",
    text_gradient: "linear-gradient(to bottom, #e1f4d4, #a3b18a, #6b7f6a)",
    button_border: "#a3b18a",
    menu_layer_primary: "#a3b18a",
    menu_layer_secondary: "#8a9e78",
    menu_layer_tertiary: "#3b4a3f",
};

const VELVET: Palette = Palette {
    background: "#3a1f1f",
    background_alt: "#4b2a30",
    foreground: "#fef4ea",
    accent: "#f29e85",
    gradient_from: "#5a2e35",
    gradient_to: "#3a1f24",
    nav_background: "transparent",
    nav_scrolled_background: "rgba(58, 31, 36, 0.85)",
    background_gradient: "linear-gradient(to bottom right, #5a2e35, #442026, #2e1417)",
    text_gradient: "linear-gradient(to bottom, #fef4ea, #f5d6c6, #d1a398)",
    button_border: "#f29e85",
    menu_layer_primary: "#f5d6c6",
    menu_layer_secondary: "#e4b5a9",
    menu_layer_tertiary: "#3a1f24",
};

impl Palette {
    /// Look up the palette for a theme. Total over [`ThemeName`].
    pub fn for_theme(theme: ThemeName) -> &'static Palette {
        match theme {
            ThemeName::Default => &DEFAULT,
            ThemeName::Light => &LIGHT,
            ThemeName::Olive => &OLIVE,
            ThemeName::Velvet => &VELVET,
        }
    }

    /// The palette used until hydration has run.
    pub fn fallback() -> &'static Palette {
        &DEFAULT
    }

    /// Color of the theme's swatch in the toggler.
    pub fn swatch(&self) -> &'static str {
        self.background
    }

    /// A hex color with a two-digit alpha suffix, e.g. `tint("#00b4d8", "20")`.
    ///
    /// Non-hex colors are returned unchanged.
    pub fn tint(color: &str, alpha: &str) -> String {
        if color.starts_with('#') && color.len() == 7 {
            format!("{color}{alpha}")
        } else {
            color.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_css_color(value: &str) -> bool {
        (value.starts_with('#') && value.len() == 7)
            || value.starts_with("rgba(")
            || value == "transparent"
    }

    #[test]
    fn test_every_color_field_is_css() {
        for theme in ThemeName::all() {
            let p = theme.palette();
            for value in [
                p.background,
                p.background_alt,
                p.foreground,
                p.accent,
                p.gradient_from,
                p.gradient_to,
                p.nav_background,
                p.nav_scrolled_background,
                p.button_border,
                p.menu_layer_primary,
                p.menu_layer_secondary,
                p.menu_layer_tertiary,
            ] {
                assert!(is_css_color(value), "{theme}: {value}");
            }
            assert!(p.background_gradient.starts_with("linear-gradient("));
            assert!(p.text_gradient.starts_with("linear-gradient("));
        }
    }

    #[test]
    fn test_palettes_are_distinct() {
        let backgrounds: std::collections::HashSet<_> = ThemeName::all()
            .iter()
            .map(|t| t.palette().background)
            .collect();
        assert_eq!(backgrounds.len(), 4);
    }

    #[test]
    fn test_fallback_is_default() {
        assert_eq!(Palette::fallback(), ThemeName::Default.palette());
    }

    #[test]
    fn test_tint() {
        assert_eq!(Palette::tint("#00b4d8", "20"), "#00b4d820");
        assert_eq!(Palette::tint("transparent", "20"), "transparent");
    }
}
