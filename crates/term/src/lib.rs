//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing and mouse hit-testing on the same geometry
//! - Allow precise control over aspect ratio (e.g. 6x3 glyphs per board cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use klotski_core as core;
pub use klotski_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{AnchorY, PuzzleView, Viewport, MAX_CELL_SIZE};
