//! Permutations of index sets, as used by the Leibniz expansion of the determinant.
//!
//! # Examples
//!
//! ```rust
//! use numtower::combinatorics::{permutation_sign, PermutationIterator};
//!
//! let mut p = PermutationIterator::new(3);
//! let mut permutations = vec![];
//! while let Some(a) = p.next() {
//!     permutations.push((a.to_vec(), permutation_sign(a)));
//! }
//!
//! let ans = vec![
//!     (vec![0, 1, 2], 1),
//!     (vec![0, 2, 1], -1),
//!     (vec![1, 0, 2], -1),
//!     (vec![1, 2, 0], 1),
//!     (vec![2, 0, 1], 1),
//!     (vec![2, 1, 0], -1),
//! ];
//!
//! assert_eq!(permutations, ans);
//! ```
use smallvec::SmallVec;

/// An iterator over all permutations of `{0, ..., n - 1}` in lexicographic order.
///
/// The permutation is borrowed from the iterator, so that no allocation
/// happens per permutation.
pub struct PermutationIterator {
    indices: SmallVec<[usize; 8]>,
    init: bool,
    done: bool,
}

impl PermutationIterator {
    /// Creates a new `PermutationIterator` over the `n!` permutations of `n` elements.
    /// There is exactly one permutation of zero elements, the empty one.
    pub fn new(n: usize) -> PermutationIterator {
        PermutationIterator {
            indices: (0..n).collect(),
            init: false,
            done: false,
        }
    }

    /// Advances the iterator and returns the next permutation.
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.init {
            self.init = true;
            return Some(&self.indices);
        }

        // find the rightmost ascent
        let Some(i) = (1..self.indices.len())
            .rev()
            .find(|&i| self.indices[i - 1] < self.indices[i])
        else {
            self.done = true;
            return None;
        };

        let pivot = self.indices[i - 1];
        let j = (i..self.indices.len())
            .rev()
            .find(|&j| self.indices[j] > pivot)
            .unwrap_or(i);

        self.indices.swap(i - 1, j);
        self.indices[i..].reverse();

        Some(&self.indices)
    }
}

/// Count the pairs `i < j` with `p[i] > p[j]`.
pub fn inversion_count(p: &[usize]) -> usize {
    let mut count = 0;
    for (i, a) in p.iter().enumerate() {
        count += p[i + 1..].iter().filter(|&b| a > b).count();
    }
    count
}

/// The sign of a permutation: `1` for an even and `-1` for an odd number of inversions.
pub fn permutation_sign(p: &[usize]) -> i32 {
    if inversion_count(p) % 2 == 0 {
        1
    } else {
        -1
    }
}
