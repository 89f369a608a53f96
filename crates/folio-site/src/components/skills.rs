//! Skills: proficiency cards, headline stats and the category lists.

use dioxus::prelude::*;
use folio_core::content::SkillItem;
use folio_core::{Palette, ThemeName};

use crate::site::use_site;
use crate::theme::use_theme;

use super::heading::LetterHeading;

#[component]
pub fn SkillsSection() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let skills = &site.content.skills;
    let stats = skills.stats();
    let muted = Palette::tint(palette.foreground, "80");
    let chip_border = Palette::tint(palette.foreground, "20");

    rsx! {
        section {
            id: "skills",
            class: "skills",
            style: "background-color: {palette.background};",

            div {
                class: "section-intro",
                LetterHeading { text: "Skills", color: "{palette.foreground}" }
                p {
                    class: "section-subtitle",
                    style: "color: {muted};",
                    "Technologies and tools I use to build scalable, performant applications"
                }
            }

            div {
                class: "skill-cards",
                for skill in skills.featured.iter() {
                    SkillCard { key: "{skill.id}", skill: skill.clone() }
                }
            }

            div {
                class: "skill-stats",
                for stat in stats {
                    div {
                        key: "{stat.label}",
                        class: "skill-stat",
                        span { class: "skill-stat-value", style: "color: {palette.accent};", "{stat.value}" }
                        span { class: "skill-stat-label", style: "color: {muted};", "{stat.label}" }
                    }
                }
            }

            div {
                class: "skill-categories",
                for category in skills.categories.iter() {
                    div {
                        key: "{category.title}",
                        class: "skill-category",
                        h3 { style: "color: {palette.foreground};", "{category.title}" }
                        div {
                            class: "skill-chips",
                            for name in category.skills.iter() {
                                span {
                                    key: "{name}",
                                    class: "skill-chip",
                                    style: "color: {palette.foreground}; border-color: {chip_border};",
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(skill: SkillItem) -> Element {
    let snapshot = use_theme().snapshot();
    let palette = snapshot.render_palette();
    // Brand colors that vanish on the matching background get the accent instead
    let bar_color = if snapshot.name != ThemeName::Light && skill.color == "#000000" {
        palette.accent.to_string()
    } else {
        skill.color.clone()
    };

    rsx! {
        article {
            class: if skill.featured { "skill-card skill-card-featured" } else { "skill-card" },
            style: "background-color: {palette.background_alt}; color: {palette.foreground};",
            div {
                class: "skill-card-header",
                h4 { "{skill.name}" }
                span { class: "skill-years", "{skill.years_exp}" }
            }
            p { class: "skill-description", "{skill.description}" }
            div {
                class: "proficiency",
                div {
                    class: "proficiency-bar",
                    style: "width: {skill.proficiency}%; background-color: {bar_color};",
                }
            }
            span { class: "proficiency-label", "{skill.proficiency}%" }
        }
    }
}
