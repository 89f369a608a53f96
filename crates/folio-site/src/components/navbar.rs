//! Fixed top bar with a full-screen layered menu.

use dioxus::prelude::*;
use folio_core::ui::motion::nav_is_scrolled;

use crate::links;
use crate::site::use_site;
use crate::theme::use_theme;

use super::icons::social_glyph;

/// Window scroll offset, updated from the webview's scroll events.
pub(crate) fn use_window_scroll() -> Signal<f64> {
    let mut scroll_y = use_signal(|| 0.0);

    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            dioxus.send(window.scrollY);
            window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
            await new Promise(() => {});
            "#,
        );
        while let Ok(y) = eval.recv::<f64>().await {
            if y != *scroll_y.peek() {
                scroll_y.set(y);
            }
        }
        tracing::debug!("Scroll listener closed");
    });

    scroll_y
}

#[component]
pub fn Navbar() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let scroll_y = use_window_scroll();
    let mut menu_open = use_signal(|| false);

    let profile = &site.content.profile;
    let open = menu_open();
    let background = if nav_is_scrolled(scroll_y()) && !open {
        palette.nav_scrolled_background
    } else {
        palette.nav_background
    };
    let nav_class = if nav_is_scrolled(scroll_y()) { "navbar navbar-scrolled" } else { "navbar" };
    let layers = [
        palette.menu_layer_primary,
        palette.menu_layer_secondary,
        palette.menu_layer_tertiary,
    ];

    rsx! {
        nav {
            class: "{nav_class}",
            style: "background: {background};",

            div {
                class: "navbar-inner",
                a {
                    class: "navbar-logo",
                    onclick: move |_| {
                        menu_open.set(false);
                        links::follow("#top");
                    },
                    "{profile.first_name}"
                    span { class: "navbar-logo-dot", style: "color: {palette.accent};", "." }
                }

                button {
                    class: if open { "menu-toggle menu-toggle-open" } else { "menu-toggle" },
                    "aria-label": if open { "Close menu" } else { "Open menu" },
                    onclick: move |_| menu_open.set(!open),
                    span { class: "menu-bar menu-bar-long" }
                    span { class: "menu-bar menu-bar-short" }
                    span { class: "menu-bar menu-bar-long" }
                }
            }
        }

        if open {
            div {
                class: "menu-overlay",
                for (i, color) in layers.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "menu-layer menu-layer-{i}",
                        style: "background: {color};",
                    }
                }

                div {
                    class: "menu-content",
                    ul {
                        class: "menu-links",
                        for link in profile.nav_links.iter() {
                            li {
                                key: "{link.path}",
                                a {
                                    class: "menu-link",
                                    onclick: {
                                        let path = link.path.clone();
                                        move |_| {
                                            menu_open.set(false);
                                            links::follow(&path);
                                        }
                                    },
                                    span { class: "menu-link-number", "{link.number}" }
                                    span { class: "menu-link-title", "{link.title}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "menu-socials",
                        for social in profile.socials.iter() {
                            button {
                                key: "{social.name}",
                                class: "social-button",
                                title: "{social.name}",
                                onclick: {
                                    let url = social.url.clone();
                                    move |_| links::open_external(&url)
                                },
                                "{social_glyph(&social.name)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
