//! Permutations of an ordered domain.

use std::{
    fmt::{self, Display},
    hash::Hash,
};

use crate::{OrderedDomain, PermutationError, index::IndexArray};

/// A bijection of an [`OrderedDomain`] onto itself.
///
/// The mapping is stored as two position arrays: `forward[i]` is the domain
/// position of the image of `domain[i]`, and `inverse` undoes it. Values are
/// immutable; operations that move through permutation space return new
/// values.
///
/// Lexicographic order compares the images of domain positions `0, 1, 2, ...`
/// in turn.
///
/// # Examples
///
/// ```
/// use permutor_core::{OrderedDomain, Permutation};
///
/// let domain = OrderedDomain::new(vec!['a', 'b', 'c'])?;
/// let p = Permutation::from_images(&domain, vec!['c', 'a', 'b'])?;
///
/// assert_eq!(p.apply(&'a'), Some(&'c'));
/// assert_eq!(p.apply_inverse(&'c'), Some(&'a'));
/// assert_eq!(p.to_string(), "[c, a, b]");
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation<T> {
    domain: OrderedDomain<T>,
    forward: Box<[usize]>,
    inverse: Box<[usize]>,
}

impl<T> Permutation<T> {
    /// Returns the identity permutation of `domain`.
    #[must_use]
    pub fn identity(domain: &OrderedDomain<T>) -> Self {
        Self::from_index_array(domain, IndexArray::identity(domain.len()))
    }

    /// Builds the permutation mapping `domain[i]` to `domain[indices[i]]`.
    ///
    /// # Panics
    ///
    /// Panics if `indices` does not have one slot per domain element.
    #[must_use]
    pub fn from_index_array(domain: &OrderedDomain<T>, indices: IndexArray) -> Self {
        assert_eq!(
            indices.len(),
            domain.len(),
            "index array length must match domain size"
        );
        let forward = indices.into_vec().into_boxed_slice();
        let mut inverse = vec![0; forward.len()].into_boxed_slice();
        for (i, &image) in forward.iter().enumerate() {
            inverse[image] = i;
        }
        Self {
            domain: domain.clone(),
            forward,
            inverse,
        }
    }

    /// Builds the permutation mapping `domain[i]` to `domain[positions[i]]`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::InvalidPositions`] if `positions` is not a
    /// permutation of `0..n`, or [`PermutationError::DomainMismatch`] if its
    /// length differs from the domain size.
    pub fn from_positions(
        domain: &OrderedDomain<T>,
        positions: Vec<usize>,
    ) -> Result<Self, PermutationError> {
        if positions.len() != domain.len() {
            return Err(PermutationError::DomainMismatch);
        }
        let indices = IndexArray::new(positions)?;
        Ok(Self::from_index_array(domain, indices))
    }

    /// Returns the domain this permutation acts on.
    #[must_use]
    pub fn domain(&self) -> &OrderedDomain<T> {
        &self.domain
    }

    /// Returns the domain size `n`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns `true` if the domain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Returns the forward position array.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.forward
    }

    /// Returns the position of the image of `domain[position]`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn apply_position(&self, position: usize) -> usize {
        self.forward[position]
    }

    /// Returns the position of the preimage of `domain[position]`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn apply_inverse_position(&self, position: usize) -> usize {
        self.inverse[position]
    }

    /// Returns the images of the domain elements, in domain order.
    pub fn images(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.forward.iter().map(move |&i| &self.domain[i])
    }

    /// Collects the images of the domain elements, in domain order.
    #[must_use]
    pub fn to_images(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.images().cloned().collect()
    }

    /// Returns `true` if every element maps to itself.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &image)| i == image)
    }

    /// Returns the inverse bijection.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            forward: self.inverse.clone(),
            inverse: self.forward.clone(),
        }
    }
}

impl<T> Permutation<T>
where
    T: Eq + Hash,
{
    /// Builds a permutation from the image of each domain element, in domain
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::DomainMismatch`] if an image is not a domain
    /// element or the count differs from the domain size, and
    /// [`PermutationError::InvalidPositions`] if an image repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use permutor_core::{OrderedDomain, Permutation, PermutationError};
    ///
    /// let domain = OrderedDomain::new(vec![1, 2, 3])?;
    /// assert!(Permutation::from_images(&domain, vec![3, 1, 2]).is_ok());
    /// assert_eq!(
    ///     Permutation::from_images(&domain, vec![3, 1, 4]),
    ///     Err(PermutationError::DomainMismatch)
    /// );
    /// # Ok::<(), PermutationError>(())
    /// ```
    pub fn from_images<I>(domain: &OrderedDomain<T>, images: I) -> Result<Self, PermutationError>
    where
        I: IntoIterator<Item = T>,
    {
        let positions = images
            .into_iter()
            .map(|image| domain.position(&image))
            .collect::<Option<Vec<_>>>()
            .ok_or(PermutationError::DomainMismatch)?;
        Self::from_positions(domain, positions)
    }

    /// Applies the permutation to `element`.
    ///
    /// Returns `None` if `element` is not in the domain.
    #[must_use]
    pub fn apply(&self, element: &T) -> Option<&T> {
        let position = self.domain.position(element)?;
        Some(&self.domain[self.forward[position]])
    }

    /// Applies the inverse permutation to `element`.
    ///
    /// Returns `None` if `element` is not in the domain.
    #[must_use]
    pub fn apply_inverse(&self, element: &T) -> Option<&T> {
        let position = self.domain.position(element)?;
        Some(&self.domain[self.inverse[position]])
    }

    /// Derives the index array of this permutation relative to `domain`.
    ///
    /// Slot `i` holds the position, within `domain`, of the image of
    /// `domain[i]`. `domain` may order the elements differently from the
    /// permutation's own domain; only the element sets must agree.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::DomainMismatch`] if the two domains do not
    /// hold the same elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use permutor_core::{OrderedDomain, Permutation};
    ///
    /// let domain = OrderedDomain::new(vec![1, 2, 3])?;
    /// let p = Permutation::from_images(&domain, vec![2, 3, 1])?;
    /// assert_eq!(p.positions_in(&domain)?.as_slice(), &[1, 2, 0]);
    ///
    /// let reordered = OrderedDomain::new(vec![3, 2, 1])?;
    /// assert_eq!(p.positions_in(&reordered)?.as_slice(), &[2, 0, 1]);
    /// # Ok::<(), permutor_core::PermutationError>(())
    /// ```
    pub fn positions_in(&self, domain: &OrderedDomain<T>) -> Result<IndexArray, PermutationError> {
        if !self.domain.same_elements(domain) {
            log::debug!("domain mismatch: permutation over {} elements", self.len());
            return Err(PermutationError::DomainMismatch);
        }
        if self.domain == *domain {
            return Ok(IndexArray::from_vec_unchecked(self.forward.to_vec()));
        }
        let positions = domain
            .iter()
            .map(|element| {
                self.apply(element)
                    .and_then(|image| domain.position(image))
                    .ok_or(PermutationError::DomainMismatch)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IndexArray::from_vec_unchecked(positions))
    }
}

impl<T: Display> Display for Permutation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, image) in self.images().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(image, f)?;
        }
        write!(f, "]")
    }
}
