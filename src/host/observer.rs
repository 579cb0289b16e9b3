//! Viewport-visibility observation.
//!
//! The engine's reveal feature is fed by a [`VisibilityObserver`]: the
//! production [`ViewportObserver`] computes intersection geometrically from
//! element rects and the scroll window, while [`ScriptedObserver`] lets
//! tests synthesize entry batches on demand.

use rustc_hash::FxHashSet;

use super::{DocumentHost, NodeId};

/// Source of "element entered the viewport" notifications.
pub trait VisibilityObserver {
    /// Start watching an element.
    fn observe(&mut self, node: NodeId);

    /// Elements that newly entered the viewport since the last poll, in
    /// observation order.
    ///
    /// Entries are at-least-once: an element that leaves and re-enters the
    /// viewport is reported again.
    fn poll(&mut self, host: &dyn DocumentHost) -> Vec<NodeId>;
}

/// Geometric observer over the host's scroll window.
///
/// An element counts as intersecting once at least `threshold` of its
/// height overlaps the window `[scroll_y, scroll_y + viewport_height -
/// bottom_inset]`. The inset makes reveals fire slightly before an element
/// reaches the viewport bottom.
pub struct ViewportObserver {
    threshold: f32,
    bottom_inset: f32,
    watched: Vec<NodeId>,
    inside: FxHashSet<NodeId>,
}

impl ViewportObserver {
    /// Create an observer with a visibility-fraction threshold and a
    /// bottom-edge inset in pixels.
    #[must_use]
    pub fn new(threshold: f32, bottom_inset: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            bottom_inset,
            watched: Vec::new(),
            inside: FxHashSet::default(),
        }
    }

    fn visible_fraction(&self, host: &dyn DocumentHost, node: NodeId) -> f32 {
        let rect = host.rect(node);
        let window_top = host.scroll_y();
        let window_bottom =
            window_top + host.viewport_height() - self.bottom_inset;
        let overlap = rect.bottom().min(window_bottom)
            - rect.top().max(window_top);
        if rect.height() <= 0.0 {
            // Zero-height elements intersect when their edge is inside
            return if overlap >= 0.0 { 1.0 } else { 0.0 };
        }
        (overlap / rect.height()).clamp(0.0, 1.0)
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(&mut self, node: NodeId) {
        if !self.watched.contains(&node) {
            self.watched.push(node);
        }
    }

    fn poll(&mut self, host: &dyn DocumentHost) -> Vec<NodeId> {
        let mut entered = Vec::new();
        for &node in &self.watched {
            let fraction = self.visible_fraction(host, node);
            let intersecting = fraction >= self.threshold && fraction > 0.0;
            if intersecting {
                if self.inside.insert(node) {
                    entered.push(node);
                }
            } else {
                // Re-arm once the element has left the window
                let _ = self.inside.remove(&node);
            }
        }
        entered
    }
}

/// Scripted observer for deterministic tests: batches are queued by the
/// test and handed out one per poll.
#[derive(Default)]
pub struct ScriptedObserver {
    watched: Vec<NodeId>,
    batches: std::collections::VecDeque<Vec<NodeId>>,
}

impl ScriptedObserver {
    /// Create an empty scripted observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch of entries for a future poll.
    pub fn push_batch(&mut self, batch: Vec<NodeId>) {
        self.batches.push_back(batch);
    }

    /// Elements registered via [`VisibilityObserver::observe`].
    #[must_use]
    pub fn watched(&self) -> &[NodeId] {
        &self.watched
    }
}

impl VisibilityObserver for ScriptedObserver {
    fn observe(&mut self, node: NodeId) {
        self.watched.push(node);
    }

    fn poll(&mut self, _host: &dyn DocumentHost) -> Vec<NodeId> {
        self.batches.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ElementRect, MemoryDocument};

    fn doc_with_section(top: f32, height: f32) -> (MemoryDocument, NodeId) {
        let mut doc = MemoryDocument::new(800.0);
        let body = doc.body();
        let section = doc.insert_with(
            body,
            "section",
            &["about"],
            ElementRect::from_vertical(top, height),
        );
        (doc, section)
    }

    #[test]
    fn fires_once_on_entry() {
        let (mut doc, section) = doc_with_section(1000.0, 400.0);
        let mut obs = ViewportObserver::new(0.1, 30.0);
        obs.observe(section);

        // Off-screen: no entries
        assert!(obs.poll(&doc).is_empty());

        // Scroll the section 10% into the window
        doc.set_scroll_y(270.0); // window bottom = 270 + 800 - 30 = 1040
        assert_eq!(obs.poll(&doc), vec![section]);

        // Still inside: no repeat entry
        doc.set_scroll_y(400.0);
        assert!(obs.poll(&doc).is_empty());
    }

    #[test]
    fn below_threshold_does_not_fire() {
        let (mut doc, section) = doc_with_section(1000.0, 400.0);
        let mut obs = ViewportObserver::new(0.1, 30.0);
        obs.observe(section);

        // Only 20px of a 400px section inside: 5% < 10%
        doc.set_scroll_y(250.0); // window bottom = 1020
        assert!(obs.poll(&doc).is_empty());
    }

    #[test]
    fn rearms_after_leaving() {
        let (mut doc, section) = doc_with_section(1000.0, 400.0);
        let mut obs = ViewportObserver::new(0.1, 30.0);
        obs.observe(section);

        doc.set_scroll_y(600.0);
        assert_eq!(obs.poll(&doc), vec![section]);

        // Scroll far past the section, then back
        doc.set_scroll_y(5000.0);
        assert!(obs.poll(&doc).is_empty());
        doc.set_scroll_y(600.0);
        assert_eq!(obs.poll(&doc), vec![section]);
    }

    #[test]
    fn bottom_inset_delays_entry() {
        let (mut doc, section) = doc_with_section(800.0, 400.0);
        let obs = ViewportObserver::new(0.1, 30.0);
        // Window is [0, 770]: nothing of the section is visible yet
        assert!(obs.visible_fraction(&doc, section) <= 0.0);
        doc.set_scroll_y(70.0); // window bottom = 840 → 40px visible = 10%
        assert!(obs.visible_fraction(&doc, section) >= 0.1);
    }

    #[test]
    fn scripted_batches_in_order() {
        let doc = MemoryDocument::new(800.0);
        let mut obs = ScriptedObserver::new();
        obs.observe(NodeId(7));
        obs.push_batch(vec![NodeId(1), NodeId(2)]);
        obs.push_batch(vec![NodeId(3)]);
        assert_eq!(obs.watched(), &[NodeId(7)]);
        assert_eq!(obs.poll(&doc), vec![NodeId(1), NodeId(2)]);
        assert_eq!(obs.poll(&doc), vec![NodeId(3)]);
        assert!(obs.poll(&doc).is_empty());
    }
}
