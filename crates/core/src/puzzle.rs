//! Puzzle module - the movement engine
//!
//! Owns the block collection and the single selection index. Every request
//! either commits a state change or silently declines; nothing here can fail.
//! Mutating methods return `true` when observable state changed so callers can
//! skip redundant redraws.

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::board::{cell_to_block_index, overlaps, Board};
use crate::layout::{Layout, LayoutError, FIXTURE};
use crate::snapshot::{BlockSnapshot, PuzzleSnapshot};
use crate::types::{Direction, Pos, PuzzleAction, MAX_BLOCKS};

/// Why a move was declined. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NoDirection,
    NoSelection,
    OutOfBounds,
    Blocked { by: usize },
}

/// Complete puzzle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    layout: Layout,
    blocks: ArrayVec<Block, MAX_BLOCKS>,
    /// Index of the one selected block. Always `< blocks.len()`.
    selected: usize,
}

impl Puzzle {
    /// Create the shipped puzzle with block 0 selected.
    pub fn new() -> Self {
        debug_assert!(FIXTURE.validate().is_ok());
        Self::build(FIXTURE)
    }

    /// Create a puzzle from a layout, rejecting unplayable ones.
    pub fn from_layout(layout: Layout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self::build(layout))
    }

    fn build(layout: Layout) -> Self {
        Self {
            layout,
            blocks: layout.blocks.iter().copied().take(MAX_BLOCKS).collect(),
            selected: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.layout.board
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.blocks.get(self.selected)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected
    }

    /// Win predicate: the goal block rests on the goal origin.
    pub fn is_solved(&self) -> bool {
        self.blocks
            .get(self.layout.goal_block)
            .is_some_and(|block| block.origin() == self.layout.goal)
    }

    /// Select block `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.blocks.len() {
            log::trace!("select({}) ignored: only {} blocks", index, self.blocks.len());
            return false;
        }
        let changed = index != self.selected;
        self.selected = index;
        changed
    }

    /// Select whichever block covers `cell`; keep the current selection when
    /// the cell is empty or off the board.
    pub fn select_at_cell(&mut self, cell: Pos) -> bool {
        match cell_to_block_index(cell, &self.blocks) {
            Some(index) => self.select(index),
            None => {
                log::trace!("no block at ({}, {}); selection kept", cell.x, cell.y);
                false
            }
        }
    }

    /// Advance the selection, wrapping to block 0 after the last one.
    pub fn select_next(&mut self) -> bool {
        let count = self.blocks.len();
        if count == 0 {
            return false;
        }
        self.selected = (self.selected + 1) % count;
        count > 1
    }

    /// Whether the selected block could slide one cell in `dir` right now.
    pub fn can_move(&self, dir: Direction) -> bool {
        self.candidate(dir).is_ok()
    }

    /// Slide the selected block one cell in `dir` if the board allows it.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        let candidate = match self.candidate(dir) {
            Ok(candidate) => candidate,
            Err(reason) => {
                log::debug!(
                    "move {} of block {} rejected: {:?}",
                    dir.as_str(),
                    self.selected,
                    reason
                );
                return false;
            }
        };

        let was_solved = self.is_solved();
        let Some(block) = self.blocks.get_mut(self.selected) else {
            return false;
        };
        block.set_origin(candidate.origin());

        if !was_solved && self.is_solved() {
            log::info!("puzzle solved");
        }
        true
    }

    /// Candidate position for a move, or the reason it is not allowed.
    ///
    /// Obstacles are every block except the selected one; the selected
    /// block always overlaps its own translation and is skipped by index.
    fn candidate(&self, dir: Direction) -> Result<Block, Rejection> {
        if dir == Direction::None {
            return Err(Rejection::NoDirection);
        }
        let current = self.selected_block().ok_or(Rejection::NoSelection)?;
        let candidate = current.translated(dir);

        if !self.layout.board.within_bounds(&candidate) {
            return Err(Rejection::OutOfBounds);
        }

        let cells = candidate.occupied_cells();
        let blocker = self
            .blocks
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_selected(*index))
            .find(|(_, other)| overlaps(&cells, &other.occupied_cells()));
        if let Some((by, _)) = blocker {
            return Err(Rejection::Blocked { by });
        }

        Ok(candidate)
    }

    /// Rebuild every block from the layout and select block 0.
    pub fn reset(&mut self) {
        *self = Self::build(self.layout);
        log::info!("puzzle reset");
    }

    /// Apply a shell request
    pub fn apply_action(&mut self, action: PuzzleAction) -> bool {
        match action {
            PuzzleAction::Move(dir) => self.try_move(dir),
            PuzzleAction::SelectNext => self.select_next(),
            PuzzleAction::Select(index) => self.select(index),
            PuzzleAction::SelectAt(cell) => self.select_at_cell(cell),
            PuzzleAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Write the per-frame view into an existing snapshot.
    ///
    /// Reusing one snapshot across frames keeps the render path
    /// allocation-free.
    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        out.board_width = self.layout.board.width();
        out.board_height = self.layout.board.height();
        out.blocks.clear();
        for (index, block) in self.blocks.iter().enumerate() {
            out.blocks.push(BlockSnapshot {
                origin: block.origin(),
                extent: block.extent(),
                selected: self.is_selected(index),
            });
        }
        out.selected = self.selected;
        out.goal_block = self.layout.goal_block;
        out.goal = self.layout.goal;
        out.solved = self.is_solved();
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut snap = PuzzleSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}
