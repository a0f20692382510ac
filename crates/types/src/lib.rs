//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The puzzle is played on a fixed 4x5 grid:
//!
//! - **Width**: 4 columns (indexed 0-3)
//! - **Height**: 5 rows (indexed 0-4)
//! - **Goal**: the 2x2 block reaching origin (0, 3)
//!
//! # Coordinates
//!
//! `(x, y)` with `x` growing to the right and `y` growing downward. A block's
//! origin is its top-left cell.
//!
//! # Examples
//!
//! ```
//! use klotski_types::{Direction, Pos, PuzzleAction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Step a position
//! assert_eq!(Pos::new(1, 1).step(dir), Pos::new(0, 1));
//!
//! // Build an engine request
//! let action = PuzzleAction::Move(Direction::Down);
//! assert_eq!(action, PuzzleAction::Move(Direction::Down));
//!
//! assert_eq!(BOARD_WIDTH, 4);
//! assert_eq!(BOARD_HEIGHT, 5);
//! ```

/// Board width in cells (4 columns)
pub const BOARD_WIDTH: u8 = 4;

/// Board height in cells (5 rows)
pub const BOARD_HEIGHT: u8 = 5;

/// Upper bound on blocks in a layout: every block covers at least one cell.
pub const MAX_BLOCKS: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on cells covered by a single block.
pub const MAX_BLOCK_CELLS: usize = MAX_BLOCKS;

/// Default input poll timeout between redraws (33ms ≈ 30 FPS)
pub const FRAME_MS: u32 = 33;

/// Integer board-cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, saturating at the `i8` range.
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Position one cell away in `dir` (`Direction::None` returns `self`).
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}

/// Block footprint in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub w: u8,
    pub h: u8,
}

impl Extent {
    pub const fn new(w: u8, h: u8) -> Self {
        Self { w, h }
    }

    pub fn area(&self) -> usize {
        (self.w as usize) * (self.h as usize)
    }
}

/// Requested movement direction.
///
/// `None` is a valid request that never moves anything; it lets callers pass
/// "no key pressed" through the same path as a real move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// The four directions that actually translate a block.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell delta `(dx, dy)` for one step.
    ///
    /// # Examples
    ///
    /// ```
    /// use klotski_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// assert_eq!(Direction::None.delta(), (0, 0));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r", "none" | "".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "none" | "" => Some(Direction::None),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::None => "none",
        }
    }
}

/// Requests the presentation shell can send to the puzzle.
///
/// One action is produced per discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    /// Slide the selected block one cell
    Move(Direction),
    /// Advance the selection cyclically
    SelectNext,
    /// Select a block by collection index
    Select(usize),
    /// Select whichever block covers this board cell
    SelectAt(Pos),
    /// Rebuild the board from the fixture
    Reset,
}
