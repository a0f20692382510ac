use arrayvec::ArrayVec;

use crate::types::{Extent, Pos, BOARD_HEIGHT, BOARD_WIDTH, MAX_BLOCKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSnapshot {
    pub origin: Pos,
    pub extent: Extent,
    pub selected: bool,
}

impl BlockSnapshot {
    pub fn contains(&self, pos: Pos) -> bool {
        let dx = pos.x as i16 - self.origin.x as i16;
        let dy = pos.y as i16 - self.origin.y as i16;
        dx >= 0 && dy >= 0 && dx < self.extent.w as i16 && dy < self.extent.h as i16
    }
}

/// Everything the shell reads back once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleSnapshot {
    pub board_width: u8,
    pub board_height: u8,
    /// Blocks in stable collection order.
    pub blocks: ArrayVec<BlockSnapshot, MAX_BLOCKS>,
    pub selected: usize,
    pub goal_block: usize,
    pub goal: Pos,
    pub solved: bool,
}

impl PuzzleSnapshot {
    /// Index of the block drawn at `pos` (last match wins, like selection).
    pub fn block_at(&self, pos: Pos) -> Option<usize> {
        self.blocks.iter().rposition(|b| b.contains(pos))
    }

    /// Footprint of the goal block, if the snapshot has one.
    pub fn goal_extent(&self) -> Option<Extent> {
        self.blocks.get(self.goal_block).map(|b| b.extent)
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            blocks: ArrayVec::new(),
            selected: 0,
            goal_block: 0,
            goal: Pos::default(),
            solved: false,
        }
    }
}
