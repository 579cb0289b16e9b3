//! Easing functions for animation interpolation.
//!
//! Provides the easing curves used by the scroll animator and the staggered
//! reveal transitions. All functions are cheap enough to evaluate once per
//! animated element per frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    ///
    /// Piecewise on normalized time: `4t³` below the midpoint,
    /// `(t−1)(2t−2)(2t−2) + 1` at and above it.
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Default easing for page scroll and reveal transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_endpoints() {
        let cubic = EasingFunction::CubicInOut;
        assert_eq!(cubic.evaluate(0.0), 0.0);
        assert!((cubic.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!((cubic.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_shape() {
        let cubic = EasingFunction::CubicInOut;
        // Slow start: early progress lags linear
        assert!(cubic.evaluate(0.25) < 0.25);
        // Fast finish: late progress leads linear
        assert!(cubic.evaluate(0.75) > 0.75);
        // Exact piecewise value below the midpoint
        assert!((cubic.evaluate(0.25) - 4.0 * 0.25_f32.powi(3)).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_monotonic() {
        let cubic = EasingFunction::CubicInOut;
        let mut prev = cubic.evaluate(0.0);
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = cubic.evaluate(t);
            assert!(
                v >= prev,
                "easing must be non-decreasing, dropped at t={t}: {v} < {prev}"
            );
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        for f in [EasingFunction::Linear, EasingFunction::CubicInOut] {
            assert_eq!(f.evaluate(-0.5), 0.0);
            assert!((f.evaluate(1.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
        assert_eq!(EasingFunction::default(), EasingFunction::DEFAULT);
    }
}
