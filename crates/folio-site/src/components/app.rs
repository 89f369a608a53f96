//! Root application component.

use dioxus::prelude::*;
use folio_core::ui::timing::{LOADING_COMPLETE, LOADING_CONTENT_DELAY, LOADING_EXIT};
use folio_core::ui::LoadingPhase;
use tokio::time::sleep;

use crate::site::{self, SiteContext};
use crate::theme::{use_theme_provider, ThemedRoot};

use super::{
    AboutSection, ContactSection, CtaSection, Footer, Hero, LoadingScreen, Navbar,
    ServicesSection, SkillsSection, ThemeToggler, WorkSection,
};

/// Root component. Renders an error panel if no site was installed.
#[component]
pub fn App() -> Element {
    match site::installed() {
        Some(site) => rsx! {
            SiteRoot { ctx: SiteContext::new(site) }
        },
        None => rsx! {
            div { class: "fatal", "Site content was not loaded." }
        },
    }
}

#[component]
fn SiteRoot(ctx: SiteContext) -> Element {
    let ctx = use_context_provider(|| ctx);
    use_theme_provider(ctx.config);

    let initial = if ctx.config.skip_intro {
        LoadingPhase::Done
    } else {
        LoadingPhase::Intro
    };
    let mut phase = use_signal(|| initial);

    use_future(move || async move {
        if phase().is_done() {
            return;
        }
        sleep(ctx.delay(LOADING_CONTENT_DELAY)).await;
        phase.write().advance_to(LoadingPhase::Content);
        sleep(ctx.delay(LOADING_COMPLETE.saturating_sub(LOADING_CONTENT_DELAY))).await;
        phase.write().advance_to(LoadingPhase::Exiting);
        sleep(ctx.delay(LOADING_EXIT)).await;
        phase.write().advance_to(LoadingPhase::Done);
        tracing::debug!("Loading screen finished");
    });

    rsx! {
        ThemedRoot {
            if !phase().is_done() {
                LoadingScreen { phase }
            }
            if phase().is_done() {
                div {
                    class: "site",
                    Navbar {}
                    main {
                        Hero {}
                        AboutSection {}
                        WorkSection {}
                        ServicesSection {}
                        SkillsSection {}
                        CtaSection {}
                        ContactSection {}
                    }
                    Footer {}
                    ThemeToggler {}
                }
            }
        }
    }
}
