use std::hash::Hash;

use permutor_core::{OrderedDomain, Permutation, PermutationError};

/// Returns the permutation that follows `p` in lexicographic order.
///
/// Performs the same single index step that [`Permutations`] uses to advance,
/// so starting from the identity and applying `successor` repeatedly visits
/// the permutations in exactly the order the iterator yields them. Returns
/// `Ok(None)` when `p` is the lexicographic maximum.
///
/// [`Permutations`]: crate::Permutations
///
/// # Errors
///
/// Returns [`PermutationError::DomainMismatch`] if `p` is not a permutation of
/// `domain`'s elements.
///
/// # Examples
///
/// ```
/// use permutor_core::{OrderedDomain, Permutation};
/// use permutor_generator::successor;
///
/// let domain = OrderedDomain::new(vec![1, 2, 3])?;
/// let next = successor(&Permutation::identity(&domain), &domain)?;
/// assert_eq!(next.map(|p| p.to_images()), Some(vec![1, 3, 2]));
///
/// let last = Permutation::from_images(&domain, vec![3, 2, 1])?;
/// assert_eq!(successor(&last, &domain)?, None);
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
pub fn successor<T>(
    p: &Permutation<T>,
    domain: &OrderedDomain<T>,
) -> Result<Option<Permutation<T>>, PermutationError>
where
    T: Eq + Hash,
{
    let mut indices = p.positions_in(domain)?;
    if !indices.advance() {
        return Ok(None);
    }
    Ok(Some(Permutation::from_index_array(domain, indices)))
}

/// Returns the permutation that precedes `p` in lexicographic order.
///
/// Returns `Ok(None)` when `p` is the identity.
///
/// # Errors
///
/// Returns [`PermutationError::DomainMismatch`] if `p` is not a permutation of
/// `domain`'s elements.
pub fn predecessor<T>(
    p: &Permutation<T>,
    domain: &OrderedDomain<T>,
) -> Result<Option<Permutation<T>>, PermutationError>
where
    T: Eq + Hash,
{
    let mut indices = p.positions_in(domain)?;
    if !indices.retreat() {
        return Ok(None);
    }
    Ok(Some(Permutation::from_index_array(domain, indices)))
}
