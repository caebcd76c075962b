// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Restricted growth strings.
//!
//! A [`GrowthString`] encodes a partition of elements `1..=n` into blocks
//! `0..k` as an array `slots[1..=n]`, where `slots[i]` is the block holding
//! element `i`. Slot 0 is an unused sentinel keeping the classical 1-based
//! indexing of the enumeration literature. The string is the single piece of
//! mutable state threaded through the whole generation recursion: it is
//! mutated in place, and every yielded partition is materialized from it as
//! an independent snapshot.

use crate::partition::Partition;

/// The mutable block-assignment array driving one enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthString {
    slots: Vec<usize>,
    k: usize,
}

impl GrowthString {
    /// Seed the string that starts the minimal-change tour.
    ///
    /// All slots are zero except the final `k-1` slots, which take blocks
    /// `1..k` in order: `slots[n-k+j] = j-1` for `j` in `1..=k`. This is the
    /// *last* partition of the underlying cyclic order; the tour begins here
    /// and the seed value determines the entire output order, so it must not
    /// be altered.
    pub fn seeded(n: usize, k: usize) -> Self {
        debug_assert!(k >= 1 && k <= n);
        let mut slots = vec![0; n + 1];
        for j in 1..=k {
            slots[n - k + j] = j - 1;
        }
        Self { slots, k }
    }

    /// Number of elements (n).
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Block currently holding element `i` (1-based).
    pub fn block_of(&self, i: usize) -> usize {
        self.slots[i]
    }

    pub(crate) fn get(&self, i: usize) -> usize {
        self.slots[i]
    }

    pub(crate) fn set(&mut self, i: usize, block: usize) {
        debug_assert!(block < self.k);
        self.slots[i] = block;
    }

    pub(crate) fn decrement(&mut self, i: usize) {
        self.slots[i] -= 1;
    }

    pub(crate) fn increment(&mut self, i: usize) {
        self.slots[i] += 1;
    }

    /// Materialize the current assignment into a fresh [`Partition`].
    ///
    /// Element `i` (1-based) lands in block `slots[i]`; elements keep their
    /// input order within each block. This is the only place the string is
    /// read into output form.
    pub fn materialize<T: Clone>(&self, elements: &[T]) -> Partition<T> {
        let mut blocks: Vec<Vec<T>> = vec![Vec::new(); self.k];
        for (i, element) in elements.iter().enumerate() {
            blocks[self.slots[i + 1]].push(element.clone());
        }
        Partition::new(blocks)
    }
}
