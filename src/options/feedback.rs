//! Pointer/touch feedback timing options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Durations for transient visual-feedback styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FeedbackOptions {
    /// How long the click-bounce styling stays on, in milliseconds.
    pub click_revert_ms: u64,
    /// How long the contact-button clicked styling stays on.
    pub button_revert_ms: u64,
    /// How long a toggled skill tag stays active before auto-revert.
    pub tag_active_ms: u64,
    /// How long touch feedback lingers after touch-end.
    pub touch_revert_ms: u64,
    /// Haptic pulse length on touch-start, in milliseconds.
    pub haptic_pulse_ms: u32,
    /// Per-tag vertical offset during project-card hover, in pixels.
    pub tag_parallax_px: f32,
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            click_revert_ms: 150,
            button_revert_ms: 300,
            tag_active_ms: 2000,
            touch_revert_ms: 150,
            haptic_pulse_ms: 10,
            tag_parallax_px: 2.0,
        }
    }
}
