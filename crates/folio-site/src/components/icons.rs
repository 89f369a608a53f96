//! Text glyphs standing in for an icon font.

/// Glyph for a service icon key. Unknown keys get a bullet.
pub fn service_glyph(key: &str) -> &'static str {
    match key {
        "code" => "</>",
        "palette" => "◐",
        "globe" => "◍",
        "zap" => "ϟ",
        "layers" => "≋",
        "database" => "⛁",
        "server" => "▤",
        "brush" => "✎",
        "sparkles" => "✦",
        "rocket" => "➚",
        _ => "•",
    }
}

/// Short label for a social network.
pub fn social_glyph(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "github" => "GH",
        "linkedin" => "in",
        "instagram" => "IG",
        "email" => "@",
        "whatsapp" => "WA",
        "phone" => "☏",
        _ => "↗",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(service_glyph("code"), "</>");
        assert_eq!(service_glyph("unknown"), "•");
        assert_eq!(social_glyph("GITHUB"), "GH");
        assert_eq!(social_glyph("Email"), "@");
    }
}
