//! The built-in interaction controllers of foldkit.
//!
//! Controllers in this crate hold authoritative widget state and turn raw
//! input events into state transitions plus presentation facts (placements,
//! rendered heights, indicator glyphs, highlights). They never draw; a host
//! shell is expected to render from the queries they expose.
pub mod accordion;
pub mod menu;

pub use accordion::Accordion;
pub use menu::MenuSet;

use foldkit_core as core;
