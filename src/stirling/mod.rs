// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stirling numbers of the second kind.
//!
//! S(n, k) counts the partitions of an n-element set into k non-empty blocks.
//! The table is built bottom-up from the recurrence
//! `S(i, j) = j * S(i-1, j) + S(i-1, j-1)` with `S(i, 1) = S(i, i) = 1`,
//! using exact arbitrary-precision arithmetic (S(n, k) outgrows `u64`
//! already around n = 26).

use crate::error::DomainError;
use ndarray::Array2;
use num_bigint::BigUint;
use num_traits::One;

/// Compute S(n, k) for `1 <= k <= n`.
///
/// Builds a temporary `(n+1) x (k+1)` table, O(n·k) time and space; the
/// table is dropped when the call returns. Pure: two calls with the same
/// arguments return the same value and share no state.
///
/// # Errors
///
/// Returns [`DomainError`] when `n == 0`, `k == 0`, or `k > n`, before any
/// allocation takes place.
///
/// # Example
///
/// ```
/// use set_partitions::stirling;
///
/// assert_eq!(stirling::count(4, 2).unwrap(), 7u32.into());
/// assert_eq!(stirling::count(10, 3).unwrap(), 9330u32.into());
/// ```
pub fn count(n: usize, k: usize) -> Result<BigUint, DomainError> {
    DomainError::check(n, k)?;

    let mut table = Array2::<BigUint>::default((n + 1, k + 1));
    for i in 1..=n {
        for j in 1..=k {
            if j == 1 || i == j {
                table[[i, j]] = BigUint::one();
            } else {
                // Entries with j > i stay zero through the recurrence.
                let value = BigUint::from(j) * &table[[i - 1, j]] + &table[[i - 1, j - 1]];
                table[[i, j]] = value;
            }
        }
    }
    Ok(std::mem::take(&mut table[[n, k]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn s(n: usize, k: usize) -> BigUint {
        count(n, k).unwrap()
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(s(1, 1), 1u32.into());
        assert_eq!(s(4, 2), 7u32.into());
        for n in 1..=12 {
            assert_eq!(s(n, n), 1u32.into());
            assert_eq!(s(n, 1), 1u32.into());
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(s(5, 3), 25u32.into());
        assert_eq!(s(6, 3), 90u32.into());
        assert_eq!(s(7, 3), 301u32.into());
        assert_eq!(s(10, 3), 9330u32.into());
        assert_eq!(s(9, 4), 7770u32.into());
        // S(n, n-1) = C(n, 2)
        assert_eq!(s(6, 5), 15u32.into());
        assert_eq!(s(10, 9), 45u32.into());
    }

    #[test]
    fn test_two_block_closed_form() {
        // S(n, 2) = 2^(n-1) - 1, including well past the u64 range.
        for n in 2..=10 {
            assert_eq!(s(n, 2), BigUint::from((1u64 << (n - 1)) - 1));
        }
        let expected = (BigUint::one() << 99u32) - BigUint::one();
        assert_eq!(s(100, 2), expected);
    }

    #[test]
    fn test_recurrence_consistency() {
        for n in 3..=10 {
            for k in 2..n {
                assert_eq!(
                    s(n, k),
                    BigUint::from(k) * s(n - 1, k) + s(n - 1, k - 1)
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(count(8, 4), count(8, 4));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(count(0, 1), Err(DomainError::NoElements { k: 1 })));
        assert!(matches!(count(5, 0), Err(DomainError::ZeroBlocks { n: 5 })));
        assert!(matches!(
            count(3, 4),
            Err(DomainError::TooManyBlocks { n: 3, k: 4 })
        ));
    }
}
