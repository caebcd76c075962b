// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partition snapshots.
//!
//! A [`Partition`] is an ordered collection of `k` blocks. Block position is
//! a stable identity, not just a display order: position `b` holds exactly
//! the elements whose growth-string entry was `b` when the snapshot was
//! taken, so two snapshots differing only by a relabeling of blocks are
//! distinct values. Within a block, elements appear in input order.

use std::fmt;

/// One partition of the input sequence into `k` non-empty blocks.
///
/// Produced by [`crate::generator::Partitions`]; each value is an independent
/// snapshot, sharing no state with the generator or with other snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition<T> {
    blocks: Vec<Vec<T>>,
}

impl<T> Partition<T> {
    pub(crate) fn new(blocks: Vec<Vec<T>>) -> Self {
        Self { blocks }
    }

    /// Number of blocks (the `k` the generator was invoked with).
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// All blocks, in block-index order.
    pub fn blocks(&self) -> &[Vec<T>] {
        &self.blocks
    }

    /// The block at position `b`, if any.
    pub fn block(&self, b: usize) -> Option<&[T]> {
        self.blocks.get(b).map(Vec::as_slice)
    }

    /// Consume the partition, yielding its blocks.
    pub fn into_blocks(self) -> Vec<Vec<T>> {
        self.blocks
    }

    /// Iterate over blocks in block-index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<T>> {
        self.blocks.iter()
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Vec<T>;
    type IntoIter = std::slice::Iter<'a, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Partition<T> {
    /// Render as `{1 2 3} | {4}`, one group per block.
    ///
    /// The original program printed all elements run together with no block
    /// boundaries; making the boundaries visible is a deliberate improvement.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (b, block) in self.blocks.iter().enumerate() {
            if b > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{{")?;
            for (i, element) in block.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", element)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
