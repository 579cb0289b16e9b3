//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (scroll timing, reveal staggers, feedback
//! durations, decoration, easter eggs, element selectors) are consolidated
//! here. Options serialize to/from TOML so a page can ship its own preset.

mod decor;
mod easter;
mod feedback;
mod reveal;
mod scroll;
mod selectors;

use std::path::Path;

pub use decor::DecorOptions;
pub use easter::EasterOptions;
pub use feedback::FeedbackOptions;
pub use reveal::RevealOptions;
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
pub use selectors::SelectorOptions;
use serde::{Deserialize, Serialize};

use crate::error::FlourishError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[reveal]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Smooth-scroll and nav-bar parameters.
    pub scroll: ScrollOptions,
    /// Viewport-entry reveal parameters.
    pub reveal: RevealOptions,
    /// Transient feedback durations.
    pub feedback: FeedbackOptions,
    /// Decoration and entrance-animation parameters.
    pub decor: DecorOptions,
    /// Easter-egg parameters.
    pub easter: EasterOptions,
    /// Element selectors per feature.
    #[schemars(skip)]
    pub selectors: SelectorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlourishError> {
        let content =
            std::fs::read_to_string(path).map_err(FlourishError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FlourishError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlourishError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlourishError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlourishError::Io)?;
        }
        std::fs::write(path, content).map_err(FlourishError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[reveal]
section_stagger_ms = 250
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.reveal.section_stagger_ms, 250);
        // Everything else should be default
        assert_eq!(opts.reveal.card_stagger_ms, 150);
        assert_eq!(opts.scroll.duration_ms, 1000);
        assert_eq!(opts.easter.logo_click_threshold, 10);
    }

    #[test]
    fn default_konami_is_the_classic_ten() {
        let opts = Options::default();
        assert_eq!(opts.easter.konami.len(), 10);
        assert_eq!(opts.easter.konami[0], "ArrowUp");
        assert_eq!(opts.easter.konami[9], "KeyA");
    }

    #[test]
    fn default_palette_floats_four_emojis() {
        let opts = Options::default();
        assert!(opts.decor.emojis.len() >= opts.decor.emoji_count);
        assert_eq!(opts.decor.emoji_count, 4);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("scroll"));
        assert!(props.contains_key("reveal"));
        assert!(props.contains_key("feedback"));
        assert!(props.contains_key("decor"));
        assert!(props.contains_key("easter"));

        // Selectors are page wiring, not UI settings
        assert!(!props.contains_key("selectors"));
    }
}
