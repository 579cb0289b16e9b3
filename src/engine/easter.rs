//! Easter-egg state machines.
//!
//! Two small, fully deterministic trackers: the Konami key-sequence
//! matcher behind secret mode, and the click counter behind the hidden
//! overlay. Both are plain state machines so the engine can drive them
//! from any event source.

use std::collections::VecDeque;

/// Matches a fixed key-code sequence over a rolling buffer.
///
/// The buffer is capped at the sequence length with FIFO eviction, so only
/// the most recent N keys are ever compared. On a match the buffer is
/// cleared: one exact feed activates exactly once.
#[derive(Debug)]
pub struct KonamiMatcher {
    sequence: Vec<String>,
    buffer: VecDeque<String>,
}

impl KonamiMatcher {
    /// Create a matcher for `sequence` (physical key strings).
    #[must_use]
    pub fn new(sequence: Vec<String>) -> Self {
        let capacity = sequence.len();
        Self {
            sequence,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Feed one key code. Returns `true` when the buffer now equals the
    /// target sequence.
    pub fn push(&mut self, code: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        self.buffer.push_back(code.to_owned());
        while self.buffer.len() > self.sequence.len() {
            let _ = self.buffer.pop_front();
        }
        let matched = self.buffer.len() == self.sequence.len()
            && self.buffer.iter().eq(self.sequence.iter());
        if matched {
            self.buffer.clear();
        }
        matched
    }

    /// Number of buffered key codes.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

/// Counts clicks toward a threshold, resetting when it is reached.
#[derive(Debug)]
pub struct ClickCounter {
    count: u32,
    threshold: u32,
}

impl ClickCounter {
    /// Create a counter that trips at `threshold` clicks.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold,
        }
    }

    /// Record one click. Returns `true` when the threshold is reached,
    /// resetting the count to zero.
    pub fn click(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            return true;
        }
        false
    }

    /// Current count since the last reset.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KONAMI: [&str; 10] = [
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
    ];

    fn matcher() -> KonamiMatcher {
        KonamiMatcher::new(KONAMI.iter().map(|&s| s.to_owned()).collect())
    }

    #[test]
    fn exact_sequence_triggers_exactly_once() {
        let mut m = matcher();
        let mut activations = 0;
        for code in KONAMI {
            if m.push(code) {
                activations += 1;
            }
        }
        assert_eq!(activations, 1);
        // Buffer cleared on match: nothing lingers
        assert_eq!(m.buffered(), 0);
    }

    #[test]
    fn one_altered_code_never_triggers() {
        for wrong_at in 0..KONAMI.len() {
            let mut m = matcher();
            for (i, code) in KONAMI.iter().enumerate() {
                let code = if i == wrong_at { "Space" } else { code };
                assert!(
                    !m.push(code),
                    "altered sequence (position {wrong_at}) must not match"
                );
            }
        }
    }

    #[test]
    fn buffer_keeps_only_most_recent_ten() {
        let mut m = matcher();
        // Garbage prefix, then the real sequence
        for _ in 0..7 {
            assert!(!m.push("Space"));
        }
        let mut matched = false;
        for code in KONAMI {
            matched = m.push(code);
        }
        assert!(matched, "trailing exact sequence must match");
    }

    #[test]
    fn sequence_matches_again_after_reset() {
        let mut m = matcher();
        for code in KONAMI {
            let _ = m.push(code);
        }
        let mut activations = 0;
        for code in KONAMI {
            if m.push(code) {
                activations += 1;
            }
        }
        assert_eq!(activations, 1);
    }

    #[test]
    fn ten_clicks_trip_and_reset() {
        let mut counter = ClickCounter::new(10);
        for i in 1..10 {
            assert!(!counter.click(), "click {i} must not trip");
        }
        assert!(counter.click());
        assert_eq!(counter.count(), 0);
        // The 11th click starts a fresh count
        assert!(!counter.click());
        assert_eq!(counter.count(), 1);
    }
}
