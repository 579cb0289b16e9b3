//! Stagger schedules for batched animations.
//!
//! A stagger is a per-item incremental delay across a batch so animations
//! start sequentially rather than simultaneously: section reveals 100 ms
//! apart, project cards 150 ms, skill tags 50 ms, hero entrance 200 ms
//! with a 200 ms lead-in.

use web_time::Duration;

/// Delay for item `index` of a batch staggered `step_ms` apart.
#[inline]
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(step_ms * index as u64)
}

/// Delay for item `index` of a staggered batch with a fixed lead-in.
#[inline]
#[must_use]
pub fn staggered_after(base_ms: u64, index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(base_ms + step_ms * index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_three_staggers_by_step() {
        let delays: Vec<_> =
            (0..3).map(|i| stagger_delay(i, 100).as_millis()).collect();
        assert_eq!(delays, vec![0, 100, 200]);
    }

    #[test]
    fn lead_in_shifts_the_whole_batch() {
        assert_eq!(staggered_after(200, 0, 200), Duration::from_millis(200));
        assert_eq!(staggered_after(200, 3, 200), Duration::from_millis(800));
    }

    #[test]
    fn zero_step_collapses_to_simultaneous() {
        assert_eq!(stagger_delay(5, 0), Duration::ZERO);
    }
}
