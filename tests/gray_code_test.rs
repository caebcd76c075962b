// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The defining property of the tour: consecutive partitions differ by one
//! element moving between two blocks, everything else staying put.

use set_partitions::{generate, Partition};

/// Block index of each element (index 0 unused).
fn assignment(partition: &Partition<usize>, n: usize) -> Vec<usize> {
    let mut assignment = vec![usize::MAX; n + 1];
    for (b, block) in partition.iter().enumerate() {
        for &element in block {
            assignment[element] = b;
        }
    }
    assignment
}

#[test]
fn consecutive_partitions_differ_by_one_move() {
    for n in 2..=8 {
        for k in 2..=n {
            let mut previous: Option<Vec<usize>> = None;
            for partition in generate((1..=n).collect(), k).unwrap() {
                let current = assignment(&partition, n);
                if let Some(previous) = previous {
                    let moved: Vec<usize> = (1..=n)
                        .filter(|&i| previous[i] != current[i])
                        .collect();
                    assert_eq!(
                        moved.len(),
                        1,
                        "n={} k={}: moved elements {:?}",
                        n,
                        k,
                        moved
                    );
                }
                previous = Some(current);
            }
        }
    }
}

#[test]
fn element_one_never_leaves_block_zero() {
    // Slot 1 is below every index the recursion touches, so the first
    // element is pinned to block 0 for the whole tour.
    for n in 1..=7 {
        for k in 1..=n {
            for partition in generate((1..=n).collect(), k).unwrap() {
                assert_eq!(partition.block(0).unwrap().first(), Some(&1));
            }
        }
    }
}

#[test]
fn pinned_order_five_into_three() {
    // Regression anchor for the full tour at n=5, k=3 (S(5,3) = 25):
    // first and last snapshots plus the one-move property pin the orbit.
    let all: Vec<Vec<Vec<usize>>> = generate((1..=5).collect(), 3)
        .unwrap()
        .map(Partition::into_blocks)
        .collect();
    assert_eq!(all.len(), 25);
    assert_eq!(all.first().unwrap(), &vec![vec![1, 2, 3], vec![4], vec![5]]);
    // No repeats over the whole run.
    let mut sorted = all.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 25);
}
