//! Small shared utilities.

pub mod easing;
pub mod frame_gate;
