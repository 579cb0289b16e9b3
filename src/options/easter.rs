//! Easter-egg options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hidden-feature parameters: the key sequence, the logo click counter,
/// and the timed secret states.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct EasterOptions {
    /// Key-code sequence that activates secret mode.
    pub konami: Vec<String>,
    /// Logo clicks required to unlock the hidden overlay.
    pub logo_click_threshold: u32,
    /// How long secret mode stays active, in milliseconds.
    pub secret_duration_ms: u64,
    /// How long the overlay stays before auto-dismissal, in milliseconds.
    pub overlay_duration_ms: u64,
}

impl Default for EasterOptions {
    fn default() -> Self {
        Self {
            konami: [
                "ArrowUp",
                "ArrowUp",
                "ArrowDown",
                "ArrowDown",
                "ArrowLeft",
                "ArrowRight",
                "ArrowLeft",
                "ArrowRight",
                "KeyB",
                "KeyA",
            ]
            .iter()
            .map(|&c| c.to_owned())
            .collect(),
            logo_click_threshold: 10,
            secret_duration_ms: 10_000,
            overlay_duration_ms: 5_000,
        }
    }
}
