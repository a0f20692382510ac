//! Board module - bounds and occupancy helpers
//!
//! The board itself holds no cells: occupancy is always derived from the
//! blocks that the puzzle owns. This module provides the pure checks the
//! movement engine is built from.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).

use crate::block::Block;
use crate::types::{Pos, BOARD_HEIGHT, BOARD_WIDTH};

/// Fixed rectangular playing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if a single cell is on the board
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u8) < self.width && (pos.y as u8) < self.height
    }

    /// Check that every cell of `block` is on the board
    pub fn within_bounds(&self, block: &Block) -> bool {
        block.cells().all(|cell| self.contains(cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// True if the two cell sets share at least one cell.
pub fn overlaps(a: &[Pos], b: &[Pos]) -> bool {
    a.iter().any(|cell| b.contains(cell))
}

/// Index of the block covering `cell`.
///
/// When several blocks claim the cell the last one in collection order wins.
/// Blocks never overlap at rest, so this only pins down scan order.
pub fn cell_to_block_index(cell: Pos, blocks: &[Block]) -> Option<usize> {
    blocks.iter().rposition(|block| block.contains(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extent;

    #[test]
    fn default_board_is_four_by_five() {
        let board = Board::default();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 5);
        assert_eq!(board.cell_count(), 20);
    }

    #[test]
    fn contains_rejects_every_edge() {
        let board = Board::default();
        assert!(board.contains(Pos::new(0, 0)));
        assert!(board.contains(Pos::new(3, 4)));
        assert!(!board.contains(Pos::new(-1, 0)));
        assert!(!board.contains(Pos::new(0, -1)));
        assert!(!board.contains(Pos::new(4, 0)));
        assert!(!board.contains(Pos::new(0, 5)));
    }

    #[test]
    fn within_bounds_checks_whole_footprint() {
        let board = Board::default();
        assert!(board.within_bounds(&Block::new(Pos::new(2, 3), Extent::new(2, 2))));
        // Origin inside, far corner outside.
        assert!(!board.within_bounds(&Block::new(Pos::new(3, 3), Extent::new(2, 1))));
        assert!(!board.within_bounds(&Block::new(Pos::new(0, 4), Extent::new(1, 2))));
    }

    #[test]
    fn overlaps_detects_shared_cell() {
        let a = Block::new(Pos::new(0, 0), Extent::new(2, 2)).occupied_cells();
        let b = Block::new(Pos::new(1, 1), Extent::new(1, 1)).occupied_cells();
        let c = Block::new(Pos::new(2, 0), Extent::new(2, 1)).occupied_cells();
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
        assert!(!overlaps(&a, &c));
        assert!(!overlaps(&a, &[]));
    }

    #[test]
    fn cell_lookup_prefers_last_match() {
        let blocks = [
            Block::new(Pos::new(0, 0), Extent::new(2, 2)),
            Block::new(Pos::new(1, 1), Extent::new(1, 1)),
        ];
        assert_eq!(cell_to_block_index(Pos::new(0, 0), &blocks), Some(0));
        assert_eq!(cell_to_block_index(Pos::new(1, 1), &blocks), Some(1));
        assert_eq!(cell_to_block_index(Pos::new(3, 3), &blocks), None);
    }
}
