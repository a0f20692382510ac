//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::PuzzleAction`]s.
//! Mouse clicks are reported as raw terminal positions; the view owns the
//! geometry that turns them into board cells.

pub mod map;

pub use klotski_types as types;

pub use map::{click_position, handle_key_event, should_quit};
