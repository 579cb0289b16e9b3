//! Frame-driven animation primitives: the scroll animator and stagger
//! schedules. Easing curves live in [`crate::util::easing`].

pub mod scroll;
pub mod stagger;

pub use scroll::{ScrollAnimation, ScrollAnimator};
pub use stagger::{stagger_delay, staggered_after};
