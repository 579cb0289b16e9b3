// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![warn(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Allowances: animation math compares against exact curve endpoints, and
// pixel/millisecond conversions truncate by construction
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]

//! Deterministic page-interactivity engine for static sites.
//!
//! Flourish drives the dynamic behavior of an otherwise static page —
//! smooth in-page scrolling, viewport-entry reveals with staggered child
//! animations, hover/click/touch feedback, decorative floating emoji, and
//! a couple of easter eggs — as a pure state machine over an abstract
//! document surface.
//!
//! # Key entry points
//!
//! - [`engine::PortfolioEngine`] - the interactivity engine
//! - [`host::DocumentHost`] - the document surface the engine mutates
//! - [`host::MemoryDocument`] - deterministic in-memory host for tests
//! - [`options::Options`] - runtime configuration (timings, staggers,
//!   selectors)
//!
//! # Architecture
//!
//! The embedder forwards [`input::PageEvent`]s as they arrive and calls
//! [`engine::PortfolioEngine::tick`] once per display frame with the
//! current time. All timed behavior (feedback reverts, reveal staggers,
//! secret-mode expiry) flows through one internal timer queue with
//! last-writer-wins cancellation slots, so re-triggering an animation
//! restarts it instead of racing stale timers. Nothing inside the engine
//! reads a clock: time only enters through `tick`, which makes every
//! behavior replayable in tests.

pub mod animation;
pub mod engine;
pub mod error;
pub mod host;
pub mod input;
pub mod options;
pub mod util;

pub use engine::PortfolioEngine;
pub use error::FlourishError;
pub use host::{DocumentHost, MemoryDocument, NodeId};
pub use input::PageEvent;
pub use options::Options;
pub use util::easing::EasingFunction;
