//! Platform-agnostic page events.
//!
//! These are fed into [`PortfolioEngine::handle_event`](crate::engine::PortfolioEngine::handle_event)
//! by the embedder. Key codes use the physical key-string convention
//! (`"ArrowUp"`, `"KeyB"`, `"Escape"`).

use crate::host::NodeId;

/// One page event, as delivered by the host event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Primary click (or tap) on an element.
    Click {
        /// Element under the pointer.
        target: NodeId,
    },
    /// Pointer entered an element.
    PointerEnter {
        /// Element under the pointer.
        target: NodeId,
    },
    /// Pointer left an element.
    PointerLeave {
        /// Element the pointer left.
        target: NodeId,
    },
    /// Touch contact started on an element.
    TouchStart {
        /// Element under the touch point.
        target: NodeId,
    },
    /// Touch contact ended on an element.
    TouchEnd {
        /// Element under the touch point.
        target: NodeId,
    },
    /// Key pressed anywhere on the page.
    KeyDown {
        /// Physical key string (`"ArrowUp"`, `"KeyB"`, ...).
        code: String,
    },
    /// The page scrolled; the engine reads the new offset from the host.
    Scroll,
    /// The viewport was resized.
    Resize,
    /// Device orientation changed.
    OrientationChange,
}
