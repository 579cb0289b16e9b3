//! Decoration and entrance-animation options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Floating-emoji decoration and hero entrance parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct DecorOptions {
    /// Emoji palette; the first `emoji_count` entries float in the hero.
    pub emojis: Vec<String>,
    /// How many palette entries to float.
    pub emoji_count: usize,
    /// Per-emoji animation-delay increment, in seconds.
    pub emoji_delay_s: f32,
    /// Lead-in before the first hero element enters, in milliseconds.
    pub entrance_base_ms: u64,
    /// Per-element entrance stagger, in milliseconds.
    pub entrance_step_ms: u64,
}

impl Default for DecorOptions {
    fn default() -> Self {
        Self {
            emojis: ["🤖", "⚡", "🔧", "💻", "⚙️", "🛠️", "🔌", "📟", "🎯", "✨"]
                .iter()
                .map(|&e| e.to_owned())
                .collect(),
            emoji_count: 4,
            emoji_delay_s: 2.0,
            entrance_base_ms: 200,
            entrance_step_ms: 200,
        }
    }
}
