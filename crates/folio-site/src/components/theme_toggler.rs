//! Floating theme picker with hover tooltips and a brief accent flash on
//! change.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_core::ui::timing::{THEME_FLASH, TOOLTIP_AFTER_CLICK, TOOLTIP_LEAVE};
use folio_core::ThemeName;
use tokio::time::sleep;

use crate::site::use_site;
use crate::theme::use_theme;

#[component]
pub fn ThemeToggler() -> Element {
    let site = use_site();
    let theme = use_theme();
    let snapshot = theme.snapshot();
    let mut tooltip = use_signal(|| None::<ThemeName>);
    let mut flash = use_signal(|| false);
    let mut tooltip_timer = use_signal(|| None::<Task>);
    let mut flash_timer = use_signal(|| None::<Task>);

    // Replace any pending tooltip timer with one that hides it after `delay`.
    let mut hide_tooltip_after = move |delay: Duration| {
        if let Some(task) = tooltip_timer.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            sleep(site.delay(delay)).await;
            tooltip.set(None);
        });
        tooltip_timer.set(Some(task));
    };

    let mut show_tooltip = move |name: ThemeName| {
        if let Some(task) = tooltip_timer.write().take() {
            task.cancel();
        }
        tooltip.set(Some(name));
    };

    let mut choose = move |name: ThemeName| {
        theme.set_theme(name);
        tooltip.set(Some(name));
        flash.set(true);
        hide_tooltip_after(TOOLTIP_AFTER_CLICK);

        if let Some(task) = flash_timer.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            sleep(site.delay(THEME_FLASH)).await;
            flash.set(false);
        });
        flash_timer.set(Some(task));
    };

    let flash_color = snapshot.palette.accent;

    rsx! {
        if flash() {
            div { class: "theme-flash", style: "background-color: {flash_color};" }
        }

        div {
            class: "theme-toggler",
            for &name in ThemeName::all() {
                div {
                    key: "{name}",
                    class: "theme-swatch-wrapper",
                    button {
                        class: if snapshot.name == name { "theme-swatch theme-swatch-active" } else { "theme-swatch" },
                        style: "background-color: {name.palette().swatch()};",
                        "aria-label": "{swatch_label(name)}",
                        onmouseenter: move |_| show_tooltip(name),
                        onmouseleave: move |_| hide_tooltip_after(TOOLTIP_LEAVE),
                        onclick: move |_| choose(name),
                        if snapshot.name == name {
                            span { class: "theme-swatch-dot" }
                        }
                    }
                    if tooltip() == Some(name) {
                        div { class: "theme-tooltip fade-up", "{name.display_name()}" }
                    }
                }
            }
        }
    }
}

fn swatch_label(name: ThemeName) -> String {
    format!("Switch to {} theme", name.as_str())
}
