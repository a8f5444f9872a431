//! Ordered finite domains.

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::{self, Debug},
    hash::Hash,
    ops::Index,
    slice,
    sync::Arc,
};

use crate::PermutationError;

/// An immutable, ordered sequence of pairwise-distinct elements.
///
/// The position of each element is fixed when the domain is built and stays
/// stable for the lifetime of the value. Lookups in both directions are O(1):
/// [`element_at`](Self::element_at) indexes the backing slice, and
/// [`position`](Self::position) consults a hash index built at construction.
///
/// Cloning is cheap; clones share the same storage.
///
/// # Examples
///
/// ```
/// use permutor_core::OrderedDomain;
///
/// let domain = OrderedDomain::new(vec!["red", "green", "blue"])?;
/// assert_eq!(domain.len(), 3);
/// assert_eq!(domain.position(&"green"), Some(1));
/// assert_eq!(domain.element_at(2), Some(&"blue"));
/// assert_eq!(domain.position(&"black"), None);
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
pub struct OrderedDomain<T> {
    inner: Arc<DomainInner<T>>,
}

struct DomainInner<T> {
    elements: Box<[T]>,
    positions: HashMap<T, usize>,
}

impl<T> OrderedDomain<T>
where
    T: Eq + Hash + Clone,
{
    /// Builds a domain from elements in their intended order.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::DuplicateElement`] if any element occurs
    /// more than once.
    pub fn new(elements: Vec<T>) -> Result<Self, PermutationError> {
        let mut positions = HashMap::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            match positions.entry(element.clone()) {
                Entry::Occupied(entry) => {
                    let first = *entry.get();
                    log::debug!("rejecting domain: element at {i} repeats position {first}");
                    return Err(PermutationError::DuplicateElement { first, second: i });
                }
                Entry::Vacant(entry) => {
                    entry.insert(i);
                }
            }
        }
        Ok(Self {
            inner: Arc::new(DomainInner {
                elements: elements.into_boxed_slice(),
                positions,
            }),
        })
    }
}

impl<T> OrderedDomain<T> {
    /// Returns the number of elements `n`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.elements.len()
    }

    /// Returns `true` if the domain has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.elements.is_empty()
    }

    /// Returns the elements in domain order.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.inner.elements
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[must_use]
    pub fn element_at(&self, index: usize) -> Option<&T> {
        self.inner.elements.get(index)
    }

    /// Returns an iterator over the elements in domain order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.elements.iter()
    }

    /// Returns `true` if both values share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> OrderedDomain<T>
where
    T: Eq + Hash,
{
    /// Returns the position of `element`, or `None` if it is not in the domain.
    #[must_use]
    pub fn position(&self, element: &T) -> Option<usize> {
        self.inner.positions.get(element).copied()
    }

    /// Returns `true` if `element` belongs to the domain.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.inner.positions.contains_key(element)
    }

    /// Returns `true` if both domains hold the same set of elements,
    /// regardless of order.
    ///
    /// # Examples
    ///
    /// ```
    /// use permutor_core::OrderedDomain;
    ///
    /// let a = OrderedDomain::new(vec![1, 2, 3])?;
    /// let b = OrderedDomain::new(vec![3, 1, 2])?;
    /// let c = OrderedDomain::new(vec![1, 2, 4])?;
    /// assert!(a.same_elements(&b));
    /// assert!(!a.same_elements(&c));
    /// # Ok::<(), permutor_core::PermutationError>(())
    /// ```
    #[must_use]
    pub fn same_elements(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        // Elements are distinct, so equal size plus inclusion is set equality.
        self.len() == other.len() && other.iter().all(|element| self.contains(element))
    }
}

impl<T> Clone for OrderedDomain<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Debug> Debug for OrderedDomain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OrderedDomain")
            .field(&self.inner.elements)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedDomain<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.elements == other.inner.elements
    }
}

impl<T: Eq> Eq for OrderedDomain<T> {}

impl<T> Index<usize> for OrderedDomain<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a OrderedDomain<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<Vec<T>> for OrderedDomain<T>
where
    T: Eq + Hash + Clone,
{
    type Error = PermutationError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}
