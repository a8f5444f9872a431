//! Index arrays and the lexicographic "next permutation" step.
//!
//! An [`IndexArray`] records, for each output slot, which domain position
//! currently occupies it. Stepping the array through lexicographic order
//! rather than the elements themselves is what lets enumeration work for any
//! element type: the order is always taken from the domain's fixed positions.
//!
//! # Examples
//!
//! ```
//! use permutor_core::index::IndexArray;
//!
//! let mut indices = IndexArray::identity(3);
//! let mut seen = vec![indices.as_slice().to_vec()];
//! while indices.advance() {
//!     seen.push(indices.as_slice().to_vec());
//! }
//! assert_eq!(
//!     seen,
//!     [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]
//! );
//! ```

use crate::PermutationError;

/// A permutation of `0..n` used as enumeration state.
///
/// The contents are always a permutation of `0..n`: constructors validate
/// their input and every mutating method preserves the property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexArray {
    indices: Vec<usize>,
}

impl IndexArray {
    /// Returns `[0, 1, ..., n - 1]`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Returns `[n - 1, ..., 1, 0]`, the lexicographically last array.
    #[must_use]
    pub fn reversed(n: usize) -> Self {
        Self {
            indices: (0..n).rev().collect(),
        }
    }

    /// Wraps `indices` after checking that it is a permutation of `0..n`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::InvalidPositions`] if an entry is out of
    /// range or repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use permutor_core::index::IndexArray;
    ///
    /// assert!(IndexArray::new(vec![2, 0, 1]).is_ok());
    /// assert!(IndexArray::new(vec![2, 0, 2]).is_err());
    /// assert!(IndexArray::new(vec![0, 3]).is_err());
    /// ```
    pub fn new(indices: Vec<usize>) -> Result<Self, PermutationError> {
        let len = indices.len();
        let mut seen = vec![false; len];
        for &index in &indices {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PermutationError::InvalidPositions { len }),
            }
        }
        Ok(Self { indices })
    }

    pub(crate) fn from_vec_unchecked(indices: Vec<usize>) -> Self {
        debug_assert!(Self::new(indices.clone()).is_ok());
        Self { indices }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the indices as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Consumes the array and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }

    /// Swaps the entries in slots `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.indices.swap(i, j);
    }

    /// Steps to the lexicographic successor in place.
    ///
    /// Returns `false`, leaving the array unchanged, if it is already the
    /// last arrangement.
    pub fn advance(&mut self) -> bool {
        next_index_permutation(&mut self.indices)
    }

    /// Steps to the lexicographic predecessor in place.
    ///
    /// Returns `false`, leaving the array unchanged, if it is already the
    /// first arrangement.
    pub fn retreat(&mut self) -> bool {
        prev_index_permutation(&mut self.indices)
    }
}

impl AsRef<[usize]> for IndexArray {
    fn as_ref(&self) -> &[usize] {
        &self.indices
    }
}

impl TryFrom<Vec<usize>> for IndexArray {
    type Error = PermutationError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(indices)
    }
}

/// Rearranges `indices` into its lexicographic successor.
///
/// Finds the rightmost ascent `i` (`indices[i] < indices[i + 1]`), swaps
/// `indices[i]` with the rightmost larger entry after it, then reverses the
/// suffix after `i`. Returns `false` without modifying the slice when there is
/// no ascent.
///
/// # Examples
///
/// ```
/// use permutor_core::index::next_index_permutation;
///
/// let mut indices = [0, 2, 1];
/// assert!(next_index_permutation(&mut indices));
/// assert_eq!(indices, [1, 0, 2]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_index_permutation(&mut last));
/// assert_eq!(last, [2, 1, 0]);
/// ```
pub fn next_index_permutation(indices: &mut [usize]) -> bool {
    let Some(i) = indices.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let pivot = indices[i];
    // The suffix after `i` is non-increasing and contains at least one larger entry.
    let Some(j) = indices.iter().rposition(|&x| x > pivot) else {
        return false;
    };
    log::trace!("next step: ascent at {i}, swap with {j}");
    indices.swap(i, j);
    indices[i + 1..].reverse();
    true
}

/// Rearranges `indices` into its lexicographic predecessor.
///
/// Mirror image of [`next_index_permutation`]: finds the rightmost descent,
/// swaps with the rightmost smaller entry after it, then reverses the suffix.
/// Returns `false` without modifying the slice when there is no descent.
///
/// # Examples
///
/// ```
/// use permutor_core::index::prev_index_permutation;
///
/// let mut indices = [1, 0, 2];
/// assert!(prev_index_permutation(&mut indices));
/// assert_eq!(indices, [0, 2, 1]);
///
/// let mut first = [0, 1, 2];
/// assert!(!prev_index_permutation(&mut first));
/// ```
pub fn prev_index_permutation(indices: &mut [usize]) -> bool {
    let Some(i) = indices.windows(2).rposition(|w| w[0] > w[1]) else {
        return false;
    };
    let pivot = indices[i];
    let Some(j) = indices.iter().rposition(|&x| x < pivot) else {
        return false;
    };
    log::trace!("prev step: descent at {i}, swap with {j}");
    indices.swap(i, j);
    indices[i + 1..].reverse();
    true
}
