// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal-change enumeration of set partitions.
//!
//! This crate enumerates every partition of a labeled `n`-element set into
//! exactly `k` non-empty blocks, visiting each partition once in a Gray-code
//! order: consecutive partitions differ by a single element moving from one
//! block to another. It also computes the number of such partitions, the
//! Stirling number of the second kind S(n, k).
//!
//! # Architecture
//!
//! The two components are independent of each other:
//!
//! ## Counting ([`stirling`])
//!
//! S(n, k) via the classical two-dimensional recurrence, using exact
//! arbitrary-precision arithmetic. A partition of `i` elements into `j`
//! blocks either places element `i` alone in a new block, or inserts it into
//! one of the `j` blocks of a smaller partition:
//!
//! ```text
//! S(i, j) = j * S(i-1, j) + S(i-1, j-1)
//! ```
//!
//! ## Enumeration ([`generator`])
//!
//! The enumeration walks a binary recursion tree of two mutually recursive
//! "grow left" / "grow right" procedures over a shared restricted growth
//! string ([`rgs::GrowthString`]), in the spirit of Ehrlich/Even minimal-change
//! generation. Rust has no native generators, so the recursion runs on an
//! explicit frame stack: each [`generator::Partitions`] iterator owns a stack
//! of suspended frames and resumes the walk one yielded snapshot at a time.
//! Each snapshot is materialized into an independent [`partition::Partition`];
//! the live growth string is never exposed.
//!
//! # Example
//!
//! ```
//! use set_partitions::{generate, stirling};
//!
//! let parts: Vec<_> = generate(vec![1, 2, 3, 4], 2).unwrap().collect();
//! assert_eq!(parts.len(), 7);
//! assert_eq!(stirling::count(4, 2).unwrap(), 7u32.into());
//! ```

pub mod error;
pub mod generator;
pub mod partition;
pub mod rgs;
pub mod stirling;

// Re-export commonly used types
pub use error::DomainError;
pub use generator::{generate, Partitions};
pub use partition::Partition;
