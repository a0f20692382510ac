//! Block module - a rigid rectangular piece
//!
//! A block is an origin (top-left cell) plus a fixed footprint. The cells it
//! covers are always derived from those two values on demand, so they can
//! never drift out of sync with the origin.

use arrayvec::ArrayVec;

use crate::types::{Direction, Extent, Pos, MAX_BLOCK_CELLS};

/// Fixed-capacity set of board cells covered by one block.
pub type CellSet = ArrayVec<Pos, MAX_BLOCK_CELLS>;

/// A single sliding block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    origin: Pos,
    extent: Extent,
}

impl Block {
    pub const fn new(origin: Pos, extent: Extent) -> Self {
        Self { origin, extent }
    }

    pub fn origin(&self) -> Pos {
        self.origin
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of cells this block covers (`w * h`).
    pub fn cell_count(&self) -> usize {
        self.extent.area()
    }

    /// Iterate covered cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let Block { origin, extent } = *self;
        (0..extent.w).flat_map(move |dx| {
            (0..extent.h).map(move |dy| origin.offset(dx as i8, dy as i8))
        })
    }

    /// Covered cells collected into a fixed-capacity set.
    ///
    /// Validated boards have at most `MAX_BLOCK_CELLS` cells, so an in-bounds
    /// block always fits; the capacity bound only truncates footprints that
    /// are already off the board.
    pub fn occupied_cells(&self) -> CellSet {
        self.cells().take(MAX_BLOCK_CELLS).collect()
    }

    /// True if `pos` lies inside this block's footprint.
    pub fn contains(&self, pos: Pos) -> bool {
        let dx = pos.x as i16 - self.origin.x as i16;
        let dy = pos.y as i16 - self.origin.y as i16;
        dx >= 0 && dy >= 0 && dx < self.extent.w as i16 && dy < self.extent.h as i16
    }

    /// The same block shifted one cell in `dir`.
    pub fn translated(&self, dir: Direction) -> Self {
        Self {
            origin: self.origin.step(dir),
            extent: self.extent,
        }
    }

    pub(crate) fn set_origin(&mut self, origin: Pos) {
        self.origin = origin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_cells_cover_footprint() {
        let block = Block::new(Pos::new(1, 3), Extent::new(2, 1));
        let cells = block.occupied_cells();
        assert_eq!(cells.as_slice(), &[Pos::new(1, 3), Pos::new(2, 3)]);
        assert_eq!(block.cell_count(), 2);
    }

    #[test]
    fn occupied_cells_follow_origin() {
        let mut block = Block::new(Pos::new(0, 0), Extent::new(2, 2));
        block.set_origin(Pos::new(1, 2));
        let cells = block.occupied_cells();
        assert_eq!(cells.len(), 4);
        for p in [Pos::new(1, 2), Pos::new(2, 2), Pos::new(1, 3), Pos::new(2, 3)] {
            assert!(cells.contains(&p), "{:?} missing", p);
        }
        assert!(!cells.contains(&Pos::new(0, 0)));
    }

    #[test]
    fn contains_matches_occupied_cells() {
        let block = Block::new(Pos::new(2, 1), Extent::new(1, 2));
        let cells = block.occupied_cells();
        for y in -1..7 {
            for x in -1..6 {
                let p = Pos::new(x, y);
                assert_eq!(block.contains(p), cells.contains(&p), "at {:?}", p);
            }
        }
    }

    #[test]
    fn translated_keeps_extent() {
        let block = Block::new(Pos::new(3, 3), Extent::new(1, 1));
        let moved = block.translated(Direction::Left);
        assert_eq!(moved.origin(), Pos::new(2, 3));
        assert_eq!(moved.extent(), block.extent());
        assert_eq!(block.translated(Direction::None), block);
    }
}
