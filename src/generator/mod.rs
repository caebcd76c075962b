// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal-change partition enumeration.
//!
//! This module implements the doubly-recursive Gray-code generator for
//! restricted growth strings (Ehrlich/Even style): two mirror-image
//! procedures, "grow left" and "grow right", walk a binary recursion tree
//! over the shared [`GrowthString`], and every partition of `n` elements
//! into `k` blocks is visited exactly once, each visit moving a single
//! element between two blocks.
//!
//! # Execution model
//!
//! The classical formulation suspends inside nested generators. Rust has no
//! native generators, so the recursion runs on an explicit stack of frames,
//! resumed by a driver loop. Each stack entry records:
//! - Which procedure is executing (its `Direction`)
//! - Its arguments `(k', n', sigma)`: reduced block count, reduced prefix
//!   length, and the parity signal
//! - A `Phase` marking the exact suspension point within the procedure
//!
//! The driver loop pops, pushes, and re-phases frames until a frame reaches
//! a yield point, at which point the iterator materializes the
//! current growth string into a fresh [`Partition`] snapshot. Dropping the
//! iterator early simply abandons the stack; nothing is shared with other
//! invocations.
//!
//! # The recursion
//!
//! With `k'` running down from `k` to 2 and `n'` from `n` down to `k'+1`:
//!
//! - **grow left** first handles the head (`k' == 2` yields a snapshot,
//!   larger `k'` recurses into `left(k'-1, n'-1, (k'+sigma) mod 2)`), then
//!   works slot `n'` *downward*: at the `n' == k'+1` boundary it seeds
//!   `slots[k'] = k'-1` and yields once per decrement of `slots[n']`; above
//!   the boundary it seeds `slots[n'-1]` or `slots[k']` by parity and
//!   dispatches to left or right at `n'-1` before and after each decrement,
//!   the direction chosen by the `(slots[n'] + sigma) mod 2` test.
//! - **grow right** is the mirror: it works slot `n'` *upward* (yielding per
//!   increment at the boundary, then zeroing the slot it seeded) and carries
//!   its `k'` recursion in tail position instead of head position.
//!
//! The parity threading is what makes consecutive snapshots differ by a
//! single element move; the transition rules here are deliberately kept in
//! exact correspondence with the classical formulation and are pinned by the
//! regression tests below and in `tests/gray_code_test.rs`.
//!
//! # Example
//!
//! ```
//! use set_partitions::generate;
//!
//! let mut parts = generate(vec!['a', 'b', 'c'], 2).unwrap();
//! let first = parts.next().unwrap();
//! assert_eq!(first.blocks(), &[vec!['a', 'b'], vec!['c']]);
//! assert_eq!(parts.count(), 2); // three partitions in total
//! ```

use crate::error::DomainError;
use crate::partition::Partition;
use crate::rgs::GrowthString;

/// Which of the two mirror procedures a frame is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Suspension point within a procedure.
///
/// `Enter` is shared; the others belong to one direction each and encode
/// where control resumes after a yield or after a child frame finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Initial dispatch on frame creation.
    Enter,
    /// Left: head (yield or child recursion) done, run the slot-`n'` body.
    AfterHead,
    /// Left boundary: yielded, next resume decrements `slots[n']` or pops.
    BaseDown,
    /// Left body: child finished, decrement `slots[n']` and redispatch.
    ScanDown,
    /// Right boundary: yielded inside the upward loop.
    BaseUp,
    /// Right boundary: final yield done, reset `slots[k']` and fall through.
    BaseUpLast,
    /// Right body: child finished, increment `slots[n']` and redispatch.
    ScanUp,
    /// Right tail: yield (`k' == 2`) or recurse into `right(k'-1, ...)`.
    Tail,
    /// Right: tail yield delivered, frame is finished.
    Done,
}

/// One suspended procedure activation.
#[derive(Debug, Clone, Copy)]
struct Frame {
    dir: Direction,
    k: usize,
    n: usize,
    sigma: usize,
    phase: Phase,
}

impl Frame {
    fn new(dir: Direction, k: usize, n: usize, sigma: usize) -> Self {
        Self {
            dir,
            k,
            n,
            sigma,
            phase: Phase::Enter,
        }
    }
}

/// Direction of the child dispatched at `n'-1`.
///
/// An odd `(slot + sigma)` flips direction; even continues in the parent's
/// direction. The same rule serves both procedures.
fn child_direction(parent: Direction, slot: usize, sigma: usize) -> Direction {
    if (slot + sigma) % 2 == 1 {
        parent.flipped()
    } else {
        parent
    }
}

/// Lazy iterator over all partitions of the input into `k` blocks.
///
/// Created by [`generate`]. Each instance owns its elements and its own
/// freshly seeded [`GrowthString`]; nothing is shared across invocations, so
/// two iterators over the same input produce identical independent
/// sequences, and dropping one mid-way is safe.
#[derive(Debug, Clone)]
pub struct Partitions<T> {
    elements: Vec<T>,
    rgs: GrowthString,
    stack: Vec<Frame>,
    /// `k == 1` bypasses the recursion (which bottoms out at `k' == 2`):
    /// the seeded string is itself the single partition.
    emit_seed: bool,
}

impl<T> Partitions<T> {
    fn new(elements: Vec<T>, k: usize) -> Self {
        let n = elements.len();
        let rgs = GrowthString::seeded(n, k);
        let mut stack = Vec::with_capacity(n);
        let emit_seed = k == 1;
        if !emit_seed {
            // The tour is started as left(k, n, 0) over the seeded string.
            stack.push(Frame::new(Direction::Left, k, n, 0));
        }
        Self {
            elements,
            rgs,
            stack,
            emit_seed,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        self.stack.last_mut().unwrap().phase = phase;
    }

    fn push(&mut self, dir: Direction, k: usize, n: usize, sigma: usize) {
        self.stack.push(Frame::new(dir, k, n, sigma));
    }

    /// Resume the walk until the next yield point.
    ///
    /// Returns true with the growth string positioned at the next partition,
    /// or false when the stack has emptied and the tour is complete.
    fn advance(&mut self) -> bool {
        loop {
            let Some(&Frame {
                dir,
                k,
                n,
                sigma,
                phase,
            }) = self.stack.last()
            else {
                return false;
            };

            match (dir, phase) {
                (Direction::Left, Phase::Enter) => {
                    // Head: two blocks yield directly, more recurse leftward.
                    self.set_phase(Phase::AfterHead);
                    if k == 2 {
                        return true;
                    }
                    self.push(Direction::Left, k - 1, n - 1, (k + sigma) % 2);
                }
                (Direction::Left, Phase::AfterHead) => {
                    if n == k + 1 {
                        self.rgs.set(k, k - 1);
                        self.set_phase(Phase::BaseDown);
                        return true;
                    } else if n > k + 1 {
                        if (k + sigma) % 2 == 1 {
                            self.rgs.set(n - 1, k - 1);
                        } else {
                            self.rgs.set(k, k - 1);
                        }
                        self.set_phase(Phase::ScanDown);
                        let child = child_direction(dir, self.rgs.get(n), sigma);
                        self.push(child, k, n - 1, 0);
                    } else {
                        // n' == k': nothing below the head at this level.
                        self.stack.pop();
                    }
                }
                (Direction::Left, Phase::BaseDown) => {
                    if self.rgs.get(n) > 0 {
                        self.rgs.decrement(n);
                        return true;
                    }
                    self.stack.pop();
                }
                (Direction::Left, Phase::ScanDown) => {
                    if self.rgs.get(n) > 0 {
                        self.rgs.decrement(n);
                        let child = child_direction(dir, self.rgs.get(n), sigma);
                        self.push(child, k, n - 1, 0);
                    } else {
                        self.stack.pop();
                    }
                }
                (Direction::Right, Phase::Enter) => {
                    if n == k + 1 {
                        // Yield before the first increment; the loop body
                        // and the post-loop snapshot are both yields.
                        let next = if self.rgs.get(n) < k - 1 {
                            Phase::BaseUp
                        } else {
                            Phase::BaseUpLast
                        };
                        self.set_phase(next);
                        return true;
                    } else if n > k + 1 {
                        self.set_phase(Phase::ScanUp);
                        let child = child_direction(dir, self.rgs.get(n), sigma);
                        self.push(child, k, n - 1, 0);
                    } else {
                        self.set_phase(Phase::Tail);
                    }
                }
                (Direction::Right, Phase::BaseUp) => {
                    self.rgs.increment(n);
                    let next = if self.rgs.get(n) < k - 1 {
                        Phase::BaseUp
                    } else {
                        Phase::BaseUpLast
                    };
                    self.set_phase(next);
                    return true;
                }
                (Direction::Right, Phase::BaseUpLast) => {
                    self.rgs.set(k, 0);
                    self.set_phase(Phase::Tail);
                }
                (Direction::Right, Phase::ScanUp) => {
                    if self.rgs.get(n) < k - 1 {
                        self.rgs.increment(n);
                        let child = child_direction(dir, self.rgs.get(n), sigma);
                        self.push(child, k, n - 1, 0);
                    } else {
                        // Zero whichever slot the matching left pass seeded.
                        if (k + sigma) % 2 == 1 {
                            self.rgs.set(n - 1, 0);
                        } else {
                            self.rgs.set(k, 0);
                        }
                        self.set_phase(Phase::Tail);
                    }
                }
                (Direction::Right, Phase::Tail) => {
                    self.set_phase(Phase::Done);
                    if k == 2 {
                        return true;
                    }
                    self.push(Direction::Right, k - 1, n - 1, (k + sigma) % 2);
                }
                (Direction::Right, Phase::Done) => {
                    self.stack.pop();
                }
                (dir, phase) => {
                    // Phases are direction-specific; a mismatch is a driver bug.
                    unreachable!("invalid phase {:?} on {:?} frame", phase, dir);
                }
            }
        }
    }
}

impl<T: Clone> Iterator for Partitions<T> {
    type Item = Partition<T>;

    fn next(&mut self) -> Option<Partition<T>> {
        if self.emit_seed {
            self.emit_seed = false;
            return Some(self.rgs.materialize(&self.elements));
        }
        if self.advance() {
            Some(self.rgs.materialize(&self.elements))
        } else {
            None
        }
    }
}

/// Enumerate all partitions of `elements` into exactly `k` non-empty blocks.
///
/// The returned iterator yields each partition once, in a minimal-change
/// order: consecutive partitions differ by one element moving between two
/// blocks. The total number of partitions is S(n, k) (see
/// [`crate::stirling::count`]; the two components are mathematically linked
/// but share no code or state).
///
/// # Errors
///
/// Returns [`DomainError`] unless `1 <= k <= n`, before any work is done.
///
/// # Example
///
/// ```
/// use set_partitions::generate;
///
/// for p in generate(vec![1, 2, 3, 4], 2).unwrap() {
///     println!("{}", p);
/// }
/// ```
pub fn generate<T: Clone>(elements: Vec<T>, k: usize) -> Result<Partitions<T>, DomainError> {
    DomainError::check(elements.len(), k)?;
    Ok(Partitions::new(elements, k))
}
