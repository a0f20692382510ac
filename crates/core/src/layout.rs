//! Layout module - the compiled-in starting position
//!
//! A layout is everything needed to (re)build a puzzle: board extent, the
//! ordered block list and the goal. [`FIXTURE`] is the one puzzle the game
//! ships with.

use std::fmt;

use crate::block::Block;
use crate::board::{overlaps, Board};
use crate::types::{Extent, Pos, BOARD_HEIGHT, BOARD_WIDTH, MAX_BLOCKS, MAX_BLOCK_CELLS};

const FIXTURE_BLOCKS: [Block; 9] = [
    Block::new(Pos::new(0, 0), Extent::new(2, 2)),
    Block::new(Pos::new(2, 0), Extent::new(2, 1)),
    Block::new(Pos::new(2, 1), Extent::new(1, 2)),
    Block::new(Pos::new(3, 1), Extent::new(1, 2)),
    Block::new(Pos::new(0, 3), Extent::new(1, 2)),
    Block::new(Pos::new(1, 3), Extent::new(2, 1)),
    Block::new(Pos::new(1, 4), Extent::new(2, 1)),
    Block::new(Pos::new(3, 3), Extent::new(1, 1)),
    Block::new(Pos::new(3, 4), Extent::new(1, 1)),
];

/// The shipped puzzle: nine blocks on a 4x5 board, two free cells at (0,2)
/// and (1,2); solved when the 2x2 block (index 0) rests at (0,3).
pub const FIXTURE: Layout = Layout {
    board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
    blocks: &FIXTURE_BLOCKS,
    goal_block: 0,
    goal: Pos::new(0, 3),
};

/// Starting position description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board: Board,
    pub blocks: &'static [Block],
    /// Index of the block that has to reach `goal`.
    pub goal_block: usize,
    /// Origin the goal block must occupy for the puzzle to count as solved.
    pub goal: Pos,
}

/// Why a layout cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// More cells than a block's cell set can hold, or a side that does not
    /// fit a signed cell coordinate.
    BoardTooLarge { width: u8, height: u8 },
    NoBlocks,
    TooManyBlocks { count: usize },
    EmptyBlock { index: usize },
    OutOfBounds { index: usize },
    Overlap { first: usize, second: usize },
    MissingGoalBlock { index: usize },
    GoalOutOfBounds { goal: Pos },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::BoardTooLarge { width, height } => write!(
                f,
                "board {}x{} is larger than {} cells",
                width, height, MAX_BLOCK_CELLS
            ),
            LayoutError::NoBlocks => write!(f, "layout has no blocks"),
            LayoutError::TooManyBlocks { count } => {
                write!(f, "layout has {} blocks (max {})", count, MAX_BLOCKS)
            }
            LayoutError::EmptyBlock { index } => write!(f, "block {} has a zero extent", index),
            LayoutError::OutOfBounds { index } => write!(f, "block {} leaves the board", index),
            LayoutError::Overlap { first, second } => {
                write!(f, "blocks {} and {} overlap", first, second)
            }
            LayoutError::MissingGoalBlock { index } => {
                write!(f, "goal block index {} does not exist", index)
            }
            LayoutError::GoalOutOfBounds { goal } => {
                write!(f, "goal ({}, {}) puts the goal block off the board", goal.x, goal.y)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl Layout {
    /// Check that the layout can be played, reporting the first problem.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = (self.board.width(), self.board.height());
        if self.board.cell_count() > MAX_BLOCK_CELLS
            || width > i8::MAX as u8
            || height > i8::MAX as u8
        {
            return Err(LayoutError::BoardTooLarge { width, height });
        }
        if self.blocks.is_empty() {
            return Err(LayoutError::NoBlocks);
        }
        if self.blocks.len() > MAX_BLOCKS {
            return Err(LayoutError::TooManyBlocks {
                count: self.blocks.len(),
            });
        }

        for (index, block) in self.blocks.iter().enumerate() {
            if block.cell_count() == 0 {
                return Err(LayoutError::EmptyBlock { index });
            }
            if !self.board.within_bounds(block) {
                return Err(LayoutError::OutOfBounds { index });
            }
        }

        for (first, a) in self.blocks.iter().enumerate() {
            let cells = a.occupied_cells();
            for (second, b) in self.blocks.iter().enumerate().skip(first + 1) {
                if overlaps(&cells, &b.occupied_cells()) {
                    return Err(LayoutError::Overlap { first, second });
                }
            }
        }

        let goal_block = self
            .blocks
            .get(self.goal_block)
            .ok_or(LayoutError::MissingGoalBlock {
                index: self.goal_block,
            })?;
        let at_goal = Block::new(self.goal, goal_block.extent());
        if !self.board.within_bounds(&at_goal) {
            return Err(LayoutError::GoalOutOfBounds { goal: self.goal });
        }

        Ok(())
    }

    /// Total cells covered by all blocks.
    pub fn covered_cells(&self) -> usize {
        self.blocks.iter().map(Block::cell_count).sum()
    }
}
