//! Frame-driven scroll animation.
//!
//! Animates the page's vertical scroll offset toward a target using an
//! easing curve, one sample per frame tick, without native smooth-scroll
//! support. At most one animation is active: starting a new one replaces
//! the previous (last writer wins), so overlapping in-page navigation
//! clicks cannot fight over the scroll position.

use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// One in-flight scroll animation.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    /// Scroll offset at the moment the animation started.
    start_offset: f32,
    /// Signed distance to the target offset.
    delta: f32,
    /// When the animation started.
    start_time: Instant,
    /// Total duration.
    duration: Duration,
    /// Easing curve shaping the velocity.
    easing: EasingFunction,
}

impl ScrollAnimation {
    /// Create an animation from `start_offset` to `target`.
    #[must_use]
    pub fn new(
        start_offset: f32,
        target: f32,
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_offset,
            delta: target - start_offset,
            start_time,
            duration,
            easing,
        }
    }

    /// Raw progress in [0, 1] at `now`.
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased scroll offset at `now`.
    #[inline]
    #[must_use]
    pub fn position_at(&self, now: Instant) -> f32 {
        let eased = self.easing.evaluate(self.progress(now));
        self.start_offset + self.delta * eased
    }

    /// Whether the animation has reached its target.
    #[inline]
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The destination offset.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.start_offset + self.delta
    }
}

/// Owns the single active scroll animation.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    active: Option<ScrollAnimation>,
}

impl ScrollAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an animation, replacing any active one.
    pub fn start(
        &mut self,
        start_offset: f32,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) {
        if let Some(prev) = &self.active {
            log::debug!(
                "scroll animation to {} preempted by new target {target}",
                prev.target()
            );
        }
        self.active = Some(ScrollAnimation::new(
            start_offset,
            target,
            now,
            duration,
            easing,
        ));
    }

    /// Sample the animation for this frame.
    ///
    /// Returns the scroll offset to apply, or `None` when idle. The final
    /// sample lands exactly on the target, after which the animator goes
    /// idle.
    pub fn step(&mut self, now: Instant) -> Option<f32> {
        let anim = self.active.as_ref()?;
        let position = anim.position_at(now);
        if anim.is_finished(now) {
            self.active = None;
        }
        Some(position)
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn midpoint_sample_matches_eased_curve() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(
            0.0,
            1000.0,
            start,
            Duration::from_millis(1000),
            EasingFunction::CubicInOut,
        );
        // easeInOutCubic(0.5) = 0.5 → position 500
        let mid = anim.position_at(start + 500 * MS);
        assert!((mid - 500.0).abs() < 1e-3);
    }

    #[test]
    fn animation_endpoints() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(
            200.0,
            1200.0,
            start,
            Duration::from_millis(1000),
            EasingFunction::CubicInOut,
        );
        assert!((anim.position_at(start) - 200.0).abs() < 1e-3);
        assert!((anim.position_at(start + 1000 * MS) - 1200.0).abs() < 1e-3);
        // Past the duration the position clamps to the target
        assert!((anim.position_at(start + 1500 * MS) - 1200.0).abs() < 1e-3);
        assert!(anim.is_finished(start + 1000 * MS));
        assert!(!anim.is_finished(start + 999 * MS));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(
            0.0,
            300.0,
            start,
            Duration::ZERO,
            EasingFunction::CubicInOut,
        );
        assert!(anim.is_finished(start));
        assert!((anim.position_at(start) - 300.0).abs() < 1e-3);
    }

    #[test]
    fn animator_runs_to_completion() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new();
        animator.start(
            0.0,
            1000.0,
            start,
            Duration::from_millis(1000),
            EasingFunction::Linear,
        );
        assert!(animator.is_animating());

        let mid = animator.step(start + 500 * MS).unwrap();
        assert!((mid - 500.0).abs() < 1e-3);
        assert!(animator.is_animating());

        let end = animator.step(start + 1200 * MS).unwrap();
        assert!((end - 1000.0).abs() < 1e-3);
        assert!(!animator.is_animating());
        assert_eq!(animator.step(start + 1300 * MS), None);
    }

    #[test]
    fn restart_is_last_writer_wins() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new();
        animator.start(
            0.0,
            1000.0,
            start,
            Duration::from_millis(1000),
            EasingFunction::Linear,
        );

        // Halfway through, a second navigation retargets the scroll
        let mid = animator.step(start + 500 * MS).unwrap();
        animator.start(
            mid,
            0.0,
            start + 500 * MS,
            Duration::from_millis(1000),
            EasingFunction::Linear,
        );

        // The old animation no longer contributes samples
        let pos = animator.step(start + 1000 * MS).unwrap();
        assert!((pos - 250.0).abs() < 1e-3);
        let end = animator.step(start + 1500 * MS).unwrap();
        assert!(end.abs() < 1e-3);
        assert!(!animator.is_animating());
    }
}
