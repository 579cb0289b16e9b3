//! Scroll-triggered reveal options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for viewport-entry reveals and their staggers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct RevealOptions {
    /// Visibility fraction at which a section counts as entered.
    pub threshold: f32,
    /// Inset from the viewport bottom so reveals fire slightly early, in
    /// pixels.
    pub bottom_inset: f32,
    /// Per-section stagger within one entry batch, in milliseconds.
    pub section_stagger_ms: u64,
    /// Per-card stagger inside the projects section, in milliseconds.
    pub card_stagger_ms: u64,
    /// Per-tag stagger inside the skills container, in milliseconds.
    pub tag_stagger_ms: u64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_inset: 30.0,
            section_stagger_ms: 100,
            card_stagger_ms: 150,
            tag_stagger_ms: 50,
        }
    }
}
