//! Smooth-scroll and navigation-bar options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Parameters for anchor-driven smooth scrolling and the nav-bar scroll
/// threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ScrollOptions {
    /// Scroll animation duration in milliseconds.
    pub duration_ms: u64,
    /// Easing curve for the scroll animation.
    pub easing: EasingFunction,
    /// Nav-bar height used when no nav element exists, in pixels.
    pub nav_fallback_height: f32,
    /// Extra margin kept above the scroll target, in pixels.
    pub anchor_margin: f32,
    /// Scroll offset past which the nav bar gets its scrolled styling.
    pub nav_threshold: f32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: EasingFunction::CubicInOut,
            nav_fallback_height: 80.0,
            anchor_margin: 20.0,
            nav_threshold: 100.0,
        }
    }
}
