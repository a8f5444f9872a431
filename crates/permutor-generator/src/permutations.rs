use std::iter::FusedIterator;

use permutor_core::{OrderedDomain, Permutation, index::IndexArray};

/// Returns an iterator over all permutations of `domain` in lexicographic
/// order.
///
/// Shorthand for [`Permutations::new`].
#[must_use]
pub fn permutations<T>(domain: &OrderedDomain<T>) -> Permutations<T> {
    Permutations::new(domain)
}

/// Lazy enumeration of all `n!` permutations of a domain.
///
/// Permutations are yielded in strictly increasing lexicographic order,
/// starting with the identity and ending with the order-reversing
/// permutation. Each iterator owns its index array, so independent iterators
/// over the same domain never share state; create a new iterator to restart.
///
/// # Examples
///
/// ```
/// use permutor_core::OrderedDomain;
/// use permutor_generator::Permutations;
///
/// let domain = OrderedDomain::new(vec![1, 2, 3])?;
/// let all = Permutations::new(&domain)
///     .map(|p| p.to_images())
///     .collect::<Vec<_>>();
/// assert_eq!(
///     all,
///     [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]]
/// );
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    domain: OrderedDomain<T>,
    indices: IndexArray,
    finished: bool,
    remaining: Option<usize>,
}

impl<T> Permutations<T> {
    /// Creates an iterator positioned at the identity permutation.
    #[must_use]
    pub fn new(domain: &OrderedDomain<T>) -> Self {
        let n = domain.len();
        Self {
            domain: domain.clone(),
            indices: IndexArray::identity(n),
            finished: false,
            remaining: (1..=n).try_fold(1_usize, usize::checked_mul),
        }
    }

    /// Returns the domain being enumerated.
    #[must_use]
    pub fn domain(&self) -> &OrderedDomain<T> {
        &self.domain
    }
}

impl<T> Iterator for Permutations<T> {
    type Item = Permutation<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = Permutation::from_index_array(&self.domain, self.indices.clone());
        if !self.indices.advance() {
            self.finished = true;
        }
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            // n! overflows usize
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Permutations<T> {}
