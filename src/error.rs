// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type for out-of-domain arguments.
//!
//! Counting and enumeration are only defined for `1 <= k <= n`. The checks
//! run before any table is allocated or any recursion begins, so a rejected
//! call has no observable effect.

use std::fmt;

/// Violations of the `1 <= k <= n` domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The element sequence is empty (n = 0); no partition exists.
    NoElements { k: usize },

    /// Zero blocks requested (k = 0); a partition needs at least one block.
    ZeroBlocks { n: usize },

    /// More blocks than elements (k > n); blocks would have to be empty.
    TooManyBlocks { n: usize, k: usize },
}

impl DomainError {
    /// Check `1 <= k <= n`, identifying which bound is violated.
    pub(crate) fn check(n: usize, k: usize) -> Result<(), DomainError> {
        if n == 0 {
            Err(DomainError::NoElements { k })
        } else if k == 0 {
            Err(DomainError::ZeroBlocks { n })
        } else if k > n {
            Err(DomainError::TooManyBlocks { n, k })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NoElements { k } => {
                write!(f, "No elements to partition into {} blocks (n = 0)", k)
            }
            DomainError::ZeroBlocks { n } => {
                write!(f, "Cannot partition {} elements into 0 blocks", n)
            }
            DomainError::TooManyBlocks { n, k } => {
                write!(
                    f,
                    "Cannot partition {} elements into {} non-empty blocks (k > n)",
                    n, k
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_domain() {
        assert!(DomainError::check(1, 1).is_ok());
        assert!(DomainError::check(4, 2).is_ok());
        assert!(DomainError::check(10, 10).is_ok());
    }

    #[test]
    fn test_check_rejects_out_of_domain() {
        assert_eq!(
            DomainError::check(0, 2),
            Err(DomainError::NoElements { k: 2 })
        );
        assert_eq!(DomainError::check(3, 0), Err(DomainError::ZeroBlocks { n: 3 }));
        assert_eq!(
            DomainError::check(3, 4),
            Err(DomainError::TooManyBlocks { n: 3, k: 4 })
        );
    }

    #[test]
    fn test_display_names_offending_values() {
        let msg = DomainError::TooManyBlocks { n: 3, k: 5 }.to_string();
        assert!(msg.contains('3') && msg.contains('5'));
    }
}
