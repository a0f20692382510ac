//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the board model and the movement engine.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: The same request sequence always produces the same board
//! - **Testable**: Every rule is exercised by unit and property tests
//! - **Portable**: Can run behind any presentation shell (terminal, GUI, headless)
//! - **Fast**: Zero-allocation move checks using fixed-capacity storage
//!
//! # Module Structure
//!
//! - [`block`]: Rigid rectangular block with on-demand occupied cells
//! - [`board`]: Board bounds plus the overlap and hit-test helpers
//! - [`layout`]: The compiled-in starting position and its validation
//! - [`puzzle`]: Selection state and the one-cell movement engine
//! - [`snapshot`]: Per-frame read-only view for the shell
//!
//! # Rules
//!
//! - Exactly one block is selected at all times
//! - A move shifts the selected block one cell; it is declined (not an error)
//!   when the block would leave the board or overlap any other block
//! - The puzzle is solved when the 2x2 block rests at (0, 3)
//!
//! # Example
//!
//! ```
//! use klotski_core::Puzzle;
//! use klotski_types::{Direction, Pos, PuzzleAction};
//!
//! let mut puzzle = Puzzle::new();
//!
//! // The 2x2 block starts selected and can drop into the free row.
//! assert!(puzzle.apply_action(PuzzleAction::Move(Direction::Down)));
//! assert_eq!(puzzle.blocks()[0].origin(), Pos::new(0, 1));
//!
//! // Walls decline moves silently.
//! assert!(!puzzle.apply_action(PuzzleAction::Move(Direction::Left)));
//!
//! assert!(!puzzle.snapshot().solved);
//! ```

pub mod block;
pub mod board;
pub mod layout;
pub mod puzzle;
pub mod snapshot;

pub use klotski_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, CellSet};
pub use board::{cell_to_block_index, overlaps, Board};
pub use layout::{Layout, LayoutError, FIXTURE};
pub use puzzle::Puzzle;
pub use snapshot::{BlockSnapshot, PuzzleSnapshot};
