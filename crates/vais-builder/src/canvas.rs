//! The ordered block list.
//!
//! Position in the list is the only render order. Blocks are shared behind
//! `Arc`, so cloning a canvas is cheap and an edit copies only the block it
//! touches: siblings keep pointing at the same allocation as any earlier
//! snapshot.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::block::{Block, BlockKind};
use crate::error::{BuilderError, Result};
use crate::field::BlockField;
use crate::id::BlockId;

/// An ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    blocks: Vec<Arc<Block>>,
}

impl Canvas {
    /// Empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas holding `blocks` in order.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().map(Arc::new).collect(),
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the canvas has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block at `index`.
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index).map(Arc::as_ref)
    }

    /// Block with `id`.
    pub fn find(&self, id: BlockId) -> Option<&Block> {
        self.index_of(id).and_then(|i| self.get(i))
    }

    /// Position of the block with `id`.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    /// Blocks in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(Arc::as_ref)
    }

    /// Kinds in render order.
    pub fn kinds(&self) -> Vec<BlockKind> {
        self.iter().map(Block::kind).collect()
    }

    /// Whether "move up" is available for `index`.
    pub fn can_move_up(&self, index: usize) -> bool {
        index > 0 && index < self.len()
    }

    /// Whether "move down" is available for `index`.
    pub fn can_move_down(&self, index: usize) -> bool {
        index < self.len().saturating_sub(1)
    }

    // ------------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------------

    /// Insert `block` at `index`, clamped to the end. Returns the position used.
    pub fn insert(&mut self, index: usize, block: Block) -> usize {
        let at = index.min(self.len());
        tracing::debug!(block = %block.id(), kind = %block.kind(), index = at, "block inserted");
        self.blocks.insert(at, Arc::new(block));
        at
    }

    /// Append `block`.
    pub fn push(&mut self, block: Block) {
        self.insert(self.len(), block);
    }

    /// Append every block in order.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        for block in blocks {
            self.push(block);
        }
    }

    /// Swap the block at `index` with the one above. `false` when unavailable.
    pub fn move_up(&mut self, index: usize) -> bool {
        if !self.can_move_up(index) {
            return false;
        }
        self.blocks.swap(index - 1, index);
        true
    }

    /// Swap the block at `index` with the one below. `false` when unavailable.
    pub fn move_down(&mut self, index: usize) -> bool {
        if !self.can_move_down(index) {
            return false;
        }
        self.blocks.swap(index, index + 1);
        true
    }

    /// Copy the block at `index` under a new id, directly after it.
    pub fn duplicate(&mut self, index: usize) -> Option<BlockId> {
        let copy = self.get(index)?.duplicate();
        let id = copy.id();
        self.insert(index + 1, copy);
        Some(id)
    }

    /// Remove and return the block at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Block> {
        if index >= self.len() {
            return None;
        }
        let removed = Arc::unwrap_or_clone(self.blocks.remove(index));
        tracing::debug!(block = %removed.id(), index, "block removed");
        Some(removed)
    }

    /// Remove and return the block with `id`.
    pub fn remove_by_id(&mut self, id: BlockId) -> Option<Block> {
        self.index_of(id).and_then(|i| self.remove(i))
    }

    /// Apply one field edit to the block with `id`.
    ///
    /// Only that block is copied if it is shared with another snapshot.
    pub fn update(&mut self, id: BlockId, field: BlockField) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or(BuilderError::BlockNotFound { id })?;

        // Validate against a scratch copy first so a rejected edit does not
        // detach a shared block.
        let slot = &mut self.blocks[index];
        if Arc::strong_count(slot) > 1 {
            let mut edited = Block::clone(slot);
            edited.apply(field)?;
            *slot = Arc::new(edited);
            Ok(())
        } else {
            Arc::make_mut(slot).apply(field)
        }
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Serialize as a JSON array of blocks.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON array of blocks.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for Canvas {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Canvas {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<Block>::deserialize(deserializer).map(Canvas::from_blocks)
    }
}

impl FromIterator<Block> for Canvas {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::from_blocks(iter)
    }
}
