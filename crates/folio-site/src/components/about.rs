//! About: intro with scroll parallax, who-am-i statement and the journey.

use dioxus::prelude::*;
use folio_core::ui::motion::{parallax_offset, scroll_progress};

use crate::links;
use crate::site::use_site;
use crate::theme::use_theme;

use super::heading::LetterHeading;
use super::icons::social_glyph;

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        div {
            class: "about",
            AboutInfo {}
            WhoAmI {}
            MyJourney {}
        }
    }
}

/// Scroll progress of `#about-intro` through the viewport.
fn use_intro_progress() -> Signal<f64> {
    let mut progress = use_signal(|| 0.0);

    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            const report = () => {
                const el = document.getElementById('about-intro');
                if (!el) return;
                const y = window.scrollY;
                dioxus.send([y, el.getBoundingClientRect().top + y, el.offsetHeight, window.innerHeight]);
            };
            window.addEventListener('scroll', report, { passive: true });
            window.addEventListener('resize', report);
            report();
            await new Promise(() => {});
            "#,
        );
        while let Ok([scroll_y, top, height, viewport]) = eval.recv::<[f64; 4]>().await {
            progress.set(scroll_progress(scroll_y, top, height, viewport));
        }
    });

    progress
}

#[component]
pub fn AboutInfo() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let progress = use_intro_progress();
    let lines = &site.content.profile.about.intro_lines;

    rsx! {
        div {
            id: "about",
            class: "about-info",
            style: "background-color: {palette.background_alt};",
            div {
                id: "about-intro",
                class: "about-intro",
                for (i, line) in lines.iter().enumerate() {
                    p {
                        key: "{i}",
                        class: if line.italic { "intro-line intro-line-italic" } else { "intro-line" },
                        style: "transform: translateX({parallax_offset(i, progress())}px); color: {palette.foreground};",
                        "{line.text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn WhoAmI() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let profile = &site.content.profile;
    let about = &profile.about;

    rsx! {
        section {
            class: "who-am-i",
            style: "background-color: {palette.background};",
            LetterHeading { text: about.heading.clone(), color: "{palette.foreground}" }

            div {
                class: "who-am-i-grid",
                div {
                    class: "who-am-i-statement",
                    p { style: "color: {palette.foreground};", "{about.statement}" }
                    div {
                        class: "availability",
                        span { class: "availability-dot", style: "background-color: {palette.accent};" }
                        span { style: "color: {palette.foreground};", "{about.availability}" }
                    }
                }

                div {
                    class: "who-am-i-socials",
                    h3 { style: "color: {palette.foreground};", "FIND ME ON:" }
                    div {
                        class: "social-list",
                        for social in profile.socials.iter() {
                            button {
                                key: "{social.name}",
                                class: "social-link",
                                style: "color: {palette.foreground};",
                                onclick: {
                                    let url = social.url.clone();
                                    move |_| links::open_external(&url)
                                },
                                span { class: "social-glyph", "{social_glyph(&social.name)}" }
                                span { "{social.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "01", "02", ... for zero-based `index`.
fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[component]
pub fn MyJourney() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let resume = site.resume();

    rsx! {
        section {
            class: "journey",
            style: "background-color: {palette.background_alt};",
            LetterHeading { text: "EXPERIENCE", color: "{palette.foreground}", class: "journey-heading" }

            div {
                class: "journey-entries",
                for (i, entry) in site.content.experience.iter().enumerate() {
                    article {
                        key: "{i}",
                        class: "journey-entry",
                        span { class: "journey-index", "{ordinal(i)}" }
                        div {
                            class: "journey-role",
                            h3 { style: "color: {palette.foreground};", "{entry.role}" }
                            p { class: "journey-role-secondary", style: "color: {palette.foreground};", "{entry.role_secondary}" }
                            p {
                                class: "gradient-text journey-company",
                                style: "background-image: {palette.text_gradient};",
                                "{entry.company}"
                            }
                        }
                        div {
                            class: "journey-detail",
                            p { class: "journey-period", style: "color: {palette.accent};", "{entry.period}" }
                            p { style: "color: {palette.foreground};", "{entry.description}" }
                        }
                    }
                }
            }

            if let Some(path) = resume {
                div {
                    class: "journey-resume",
                    button {
                        class: "resume-link",
                        style: "color: {palette.foreground};",
                        onclick: move |_| links::open_external(&path.to_string_lossy()),
                        "RESUME"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ordinal;

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(11), "12");
    }
}
