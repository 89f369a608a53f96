//! Intro loading screen: three stacked panels that slide away.

use dioxus::prelude::*;
use folio_core::ui::timing::layer_transition;
use folio_core::ui::LoadingPhase;
use folio_core::Palette;

use crate::site::use_site;
use crate::theme::use_theme;

#[component]
pub fn LoadingScreen(phase: Signal<LoadingPhase>) -> Element {
    let site = use_site();
    let snapshot = use_theme().snapshot();
    let palette = snapshot.render_palette();
    let phase = phase();

    let offset = if phase.is_exiting() { "-100%" } else { "0" };
    let layers: Vec<String> = [
        palette.menu_layer_primary,
        palette.menu_layer_secondary,
        palette.menu_layer_tertiary,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, color)| {
        format!(
            "background: {color}; z-index: {}; transform: translateY({offset}); transition: {};",
            100 + i,
            layer_transition(i)
        )
    })
    .collect();
    let text_class = if snapshot.is_hydrated && snapshot.name.is_light() {
        "loading-text loading-text-dark"
    } else {
        "loading-text"
    };
    let track = Palette::tint(palette.accent, "20");

    rsx! {
        div {
            class: "loading-screen",
            for (i, layer_style) in layers.into_iter().enumerate() {
                div { key: "{i}", class: "loading-layer", style: "{layer_style}" }
            }

            div {
                class: "loading-content",
                if phase.shows_content() && !phase.is_exiting() {
                    div {
                        class: "{text_class} fade-up",
                        h1 {
                            class: "loading-name",
                            "{site.content.profile.display_name()}"
                            span { class: "loading-dot", style: "color: {palette.accent};", "." }
                        }
                        p { class: "loading-subtitle", "Portfolio Loading..." }
                        div {
                            class: "loading-progress",
                            style: "background-color: {track};",
                            div {
                                class: "loading-progress-bar",
                                style: "background-color: {palette.accent};",
                            }
                        }
                    }
                    p { class: "{text_class} loading-welcome", "Welcome to my digital space" }
                }
            }
        }
    }
}
