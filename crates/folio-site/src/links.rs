//! Link handling: in-page anchors scroll, everything else goes to the system.

use dioxus::prelude::*;

/// Smooth-scroll to the element with `id`.
pub fn scroll_to(id: &str) {
    let js = format!(
        "document.getElementById({})?.scrollIntoView({{behavior:'smooth'}})",
        js_string(id)
    );
    document::eval(&js);
}

/// Follow an href: `#anchor` scrolls, anything else opens in the default
/// handler (browser, mail client, dialer).
pub fn follow(href: &str) {
    match href.strip_prefix('#') {
        Some("top") | Some("") => {
            document::eval("window.scrollTo({top:0,behavior:'smooth'})");
        }
        Some(id) => scroll_to(id),
        None => open_external(href),
    }
}

pub fn open_external(url: &str) {
    tracing::debug!(url, "Opening link");
    if let Err(e) = open::that(url) {
        tracing::warn!("Failed to open '{}': {}", url, e);
    }
}

/// Quote a value for embedding in a JS snippet.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("work"), "\"work\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    }
}
