//! Capability-abstracted document surface.
//!
//! Every document read and mutation the engine performs goes through the
//! [`DocumentHost`] trait: selector queries, class-list and inline-style
//! edits, scroll position, viewport metrics, and the vibration actuator.
//! Production embedders back it with a real rendering surface; tests and
//! the demo binary use the in-memory [`MemoryDocument`].

mod memory;
mod observer;

pub use memory::MemoryDocument;
pub use observer::{ScriptedObserver, ViewportObserver, VisibilityObserver};

use glam::Vec2;

/// Opaque handle to a document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Axis-aligned element rectangle in document space.
///
/// `origin.y` is the distance from the document top, independent of the
/// current scroll position (the viewport-relative top is
/// `origin.y - scroll_y`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    /// Top-left corner in document coordinates.
    pub origin: Vec2,
    /// Width and height in pixels.
    pub size: Vec2,
}

impl ElementRect {
    /// Rect from document-space top and height (x extent unused by the
    /// engine's vertical-only math).
    #[must_use]
    pub fn from_vertical(top: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(0.0, top),
            size: Vec2::new(0.0, height),
        }
    }

    /// Document-space top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Document-space bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Element height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// Host capabilities detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Whether the host is touch-driven (hover styling is skipped).
    pub touch: bool,
    /// Whether the host has a vibration actuator for haptic pulses.
    pub vibration: bool,
}

/// The document surface the engine runs against.
///
/// Mutations are best-effort: operations on stale [`NodeId`]s are silently
/// ignored, matching the page's tolerance for absent elements.
pub trait DocumentHost {
    /// All elements matching `selector`, in document order.
    ///
    /// Hosts support at least `tag`, `.class`, `#id`, comma-separated
    /// lists, and the `.class > *` child form.
    fn query(&self, selector: &str) -> Vec<NodeId>;

    /// First element matching `selector`, if any.
    fn query_first(&self, selector: &str) -> Option<NodeId> {
        self.query(selector).into_iter().next()
    }

    /// Elements matching `selector` among the descendants of `root`.
    fn query_within(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Whether the element carries `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add `class` to the element's class list. Idempotent.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove `class` from the element's class list. Idempotent.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Toggle `class` on the element's class list.
    fn toggle_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            self.remove_class(node, class);
        } else {
            self.add_class(node, class);
        }
    }

    /// Set an inline style property.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Clear an inline style property.
    fn clear_style(&mut self, node: NodeId, property: &str);

    /// Read an attribute value.
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Set an attribute value.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Whether the element carries an attribute.
    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Append a new child element and return its handle.
    fn append_child(
        &mut self,
        parent: NodeId,
        tag: &str,
        class: &str,
        text: &str,
    ) -> NodeId;

    /// Detach an element (and its subtree) from the document.
    fn remove_node(&mut self, node: NodeId);

    /// Whether the element is still attached to the document.
    fn contains(&self, node: NodeId) -> bool;

    /// Element rectangle in document space.
    fn rect(&self, node: NodeId) -> ElementRect;

    /// The document body element.
    fn body(&self) -> NodeId;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f32;

    /// Set the vertical scroll offset. Hosts clamp to the scrollable range.
    fn set_scroll_y(&mut self, y: f32);

    /// Viewport height in pixels.
    fn viewport_height(&self) -> f32;

    /// Set a custom property on the document root (e.g. `--vh`).
    fn set_root_property(&mut self, name: &str, value: &str);

    /// Fire a vibration pulse. No-op on hosts without an actuator.
    fn vibrate(&mut self, duration_ms: u32);

    /// Capability flags, detected once by the host.
    fn capabilities(&self) -> Capabilities;
}
