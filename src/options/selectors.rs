//! Selector options: which elements each feature wires to.

use serde::{Deserialize, Serialize};

/// Selectors for every element set the engine queries at attach time.
///
/// Defaults match the portfolio page's markup; a different page can remap
/// them from TOML without touching engine code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorOptions {
    /// Navigation bar.
    pub nav: String,
    /// Nav logo (click-counter target).
    pub logo: String,
    /// Hero section (floating-emoji parent).
    pub hero: String,
    /// Page regions observed for scroll reveal.
    pub sections: Vec<String>,
    /// Elements with hover/click bounce feedback.
    pub interactive: Vec<String>,
    /// Project cards.
    pub project_card: String,
    /// Tech tags inside a project card.
    pub tech_tag: String,
    /// Skill tags.
    pub skill_tag: String,
    /// Contact button.
    pub contact_button: String,
    /// Hero elements shown by the entrance animation, in order.
    pub hero_entrance: Vec<String>,
    /// Headings restyled by secret mode.
    pub headings: String,
    /// Elements with touch feedback.
    pub touchable: Vec<String>,
    /// Elements with a haptic pulse on touch.
    pub haptic: Vec<String>,
    /// Elements hinted with `will-change: transform`.
    pub will_change: Vec<String>,
    /// Images given deferred-loading hints.
    pub images: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        let own = |items: &[&str]| -> Vec<String> {
            items.iter().map(|&s| s.to_owned()).collect()
        };
        Self {
            nav: ".nav".to_owned(),
            logo: ".nav-logo".to_owned(),
            hero: ".hero".to_owned(),
            sections: own(&[
                ".about",
                ".projects",
                ".contact",
                ".project-section",
                ".hero-content > *",
                ".about-content > *",
                ".skills-container > *",
            ]),
            interactive: own(&[
                ".hero-cta",
                ".contact-btn",
                ".nav-link",
                ".skill-tag",
            ]),
            project_card: ".project-card".to_owned(),
            tech_tag: ".tech-tag".to_owned(),
            skill_tag: ".skill-tag".to_owned(),
            contact_button: ".contact-btn".to_owned(),
            hero_entrance: own(&[
                ".hero-greeting",
                ".hero-title",
                ".hero-subtitle",
                ".hero-cta",
            ]),
            headings: "h1, h2, h3".to_owned(),
            touchable: own(&[
                "a",
                "button",
                ".project-card",
                ".skill-tag",
                ".nav-link",
            ]),
            haptic: own(&[".hero-cta", ".contact-btn", ".project-card"]),
            will_change: own(&[
                ".floating-emoji",
                ".project-card",
                ".hero-cta",
            ]),
            images: "img".to_owned(),
        }
    }
}
