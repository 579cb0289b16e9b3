//! Per-frame coalescing gate for scroll-driven work.

/// Coalesces a burst of events down to one evaluation per frame tick.
///
/// Scroll events can arrive many times between display frames; the nav-bar
/// threshold check only needs to run once per frame. `request` arms the
/// gate, `take` disarms it and reports whether any request arrived since
/// the last frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    armed: bool,
}

impl FrameGate {
    /// Create a disarmed gate.
    #[must_use]
    pub fn new() -> Self {
        Self { armed: false }
    }

    /// Record that work is wanted on the next frame. Idempotent.
    pub fn request(&mut self) {
        self.armed = true;
    }

    /// Consume the pending request, if any. Called once per frame.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    /// Whether a request is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_one_take() {
        let mut gate = FrameGate::new();
        gate.request();
        gate.request();
        gate.request();
        assert!(gate.take());
        assert!(!gate.take());
    }

    #[test]
    fn idle_gate_yields_nothing() {
        let mut gate = FrameGate::new();
        assert!(!gate.is_armed());
        assert!(!gate.take());
    }
}
