//! Lehmer codes: the factoradic digits of a permutation's rank.

use std::hash::Hash;

use permutor_core::{OrderedDomain, Permutation, PermutationError, index::IndexArray};

use crate::fenwick::Fenwick;

/// The Lehmer code of a permutation.
///
/// Digit `i` counts the later slots whose image sits earlier in the domain
/// than the image of slot `i`, so `0 <= code[i] <= n - 1 - i` always holds.
/// Read as factorial-base digits, the code is the permutation's
/// lexicographic rank (see [`LehmerCode::to_rank`]).
///
/// # Examples
///
/// ```
/// use permutor_core::{OrderedDomain, Permutation};
/// use permutor_rank::LehmerCode;
///
/// let domain = OrderedDomain::new(vec![1, 2, 3, 4])?;
/// let p = Permutation::from_images(&domain, vec![3, 1, 4, 2])?;
///
/// let code = LehmerCode::of(&p, &domain)?;
/// assert_eq!(code.digits(), &[2, 0, 1, 0]);
/// assert_eq!(code.decode(&domain)?, p);
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LehmerCode {
    digits: Vec<usize>,
}

impl LehmerCode {
    /// Wraps `digits` after checking each one against its place limit.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::InvalidLehmerCode`] for the first digit with
    /// `digits[i] > n - 1 - i`.
    pub fn new(digits: Vec<usize>) -> Result<Self, PermutationError> {
        let n = digits.len();
        for (index, &digit) in digits.iter().enumerate() {
            let max = n - 1 - index;
            if digit > max {
                return Err(PermutationError::InvalidLehmerCode { index, digit, max });
            }
        }
        Ok(Self { digits })
    }

    pub(crate) fn from_digits_unchecked(digits: Vec<usize>) -> Self {
        debug_assert!(Self::new(digits.clone()).is_ok());
        Self { digits }
    }

    /// Returns the code of the identity permutation of size `n`: all zeros.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        Self { digits: vec![0; n] }
    }

    /// Computes the Lehmer code of `p` relative to `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::DomainMismatch`] if `p` is not a
    /// permutation of `domain`'s elements.
    pub fn of<T>(p: &Permutation<T>, domain: &OrderedDomain<T>) -> Result<Self, PermutationError>
    where
        T: Eq + Hash,
    {
        let indices = p.positions_in(domain)?;
        Ok(Self::from_index_array(&indices))
    }

    /// Computes the Lehmer code of an index array.
    ///
    /// Counts inversions right to left with a Fenwick tree, O(n log n).
    #[must_use]
    pub fn from_index_array(indices: &IndexArray) -> Self {
        let positions = indices.as_slice();
        let mut seen = Fenwick::new(positions.len());
        let mut digits = vec![0; positions.len()];
        for (i, &position) in positions.iter().enumerate().rev() {
            digits[i] = seen.count_below(position);
            seen.insert(position);
        }
        Self::from_digits_unchecked(digits)
    }

    /// Returns the digits.
    #[must_use]
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Returns the number of digits `n`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if the code has no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Consumes the code and returns its digits.
    #[must_use]
    pub fn into_digits(self) -> Vec<usize> {
        self.digits
    }

    /// Reconstructs the permutation of `domain` this code describes.
    ///
    /// Starting from the domain positions in order, digit `i` selects (and
    /// removes) the entry that becomes the image of slot `i`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::DomainMismatch`] if the code length differs
    /// from the domain size.
    pub fn decode<T>(&self, domain: &OrderedDomain<T>) -> Result<Permutation<T>, PermutationError> {
        if self.len() != domain.len() {
            log::debug!(
                "cannot decode {} digits over {} elements",
                self.len(),
                domain.len()
            );
            return Err(PermutationError::DomainMismatch);
        }
        let mut remaining = (0..domain.len()).collect::<Vec<_>>();
        let positions = self
            .digits
            .iter()
            .map(|&digit| remaining.remove(digit))
            .collect();
        Permutation::from_positions(domain, positions)
    }
}

impl TryFrom<Vec<usize>> for LehmerCode {
    type Error = PermutationError;

    fn try_from(digits: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

/// Computes the Lehmer code of `p` relative to `domain`.
///
/// Shorthand for [`LehmerCode::of`].
///
/// # Errors
///
/// Returns [`PermutationError::DomainMismatch`] if `p` is not a permutation of
/// `domain`'s elements.
pub fn lehmer_code<T>(
    p: &Permutation<T>,
    domain: &OrderedDomain<T>,
) -> Result<LehmerCode, PermutationError>
where
    T: Eq + Hash,
{
    LehmerCode::of(p, domain)
}

/// Reconstructs a permutation of `domain` from its Lehmer code.
///
/// Shorthand for [`LehmerCode::decode`].
///
/// # Errors
///
/// Returns [`PermutationError::DomainMismatch`] if the code length differs
/// from the domain size.
pub fn from_lehmer_code<T>(
    domain: &OrderedDomain<T>,
    code: &LehmerCode,
) -> Result<Permutation<T>, PermutationError> {
    code.decode(domain)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn domain(n: u32) -> OrderedDomain<u32> {
        OrderedDomain::new((1..=n).collect()).unwrap()
    }

    fn naive_code(positions: &[usize]) -> Vec<usize> {
        (0..positions.len())
            .map(|i| {
                positions[i + 1..]
                    .iter()
                    .filter(|&&later| later < positions[i])
                    .count()
            })
            .collect()
    }

    #[test]
    fn test_identity_and_reverse() {
        let domain = domain(4);

        let identity = Permutation::identity(&domain);
        assert_eq!(lehmer_code(&identity, &domain).unwrap().digits(), &[0, 0, 0, 0]);
        assert_eq!(LehmerCode::zero(4), lehmer_code(&identity, &domain).unwrap());

        let last = Permutation::from_images(&domain, vec![4, 3, 2, 1]).unwrap();
        assert_eq!(lehmer_code(&last, &domain).unwrap().digits(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_empty_and_singleton() {
        for n in 0..=1 {
            let domain = domain(n);
            let code = lehmer_code(&Permutation::identity(&domain), &domain).unwrap();
            assert_eq!(code.len(), domain.len());
            assert!(code.digits().iter().all(|&d| d == 0));
            assert_eq!(code.decode(&domain).unwrap(), Permutation::identity(&domain));
        }
    }

    #[test]
    fn test_decode() {
        let domain = domain(4);
        let code = LehmerCode::new(vec![0, 0, 1, 0]).unwrap();
        let p = from_lehmer_code(&domain, &code).unwrap();
        assert_eq!(p.to_images(), vec![1, 2, 4, 3]);

        let code = LehmerCode::new(vec![3, 2, 1, 0]).unwrap();
        assert_eq!(code.decode(&domain).unwrap().to_images(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_invalid_digits() {
        assert_eq!(
            LehmerCode::new(vec![0, 3, 0, 0]),
            Err(PermutationError::InvalidLehmerCode {
                index: 1,
                digit: 3,
                max: 2
            })
        );
        assert!(LehmerCode::try_from(vec![0, 1]).is_err());
        assert!(LehmerCode::new(vec![]).is_ok());
    }

    #[test]
    fn test_domain_mismatch() {
        let small = domain(3);
        let large = domain(4);
        let p = Permutation::identity(&small);
        assert_eq!(
            lehmer_code(&p, &large),
            Err(PermutationError::DomainMismatch)
        );
        assert_eq!(
            LehmerCode::zero(3).decode(&large),
            Err(PermutationError::DomainMismatch)
        );

        // Same size, different element
        let other = OrderedDomain::new(vec![1, 2, 4]).unwrap();
        assert_eq!(
            lehmer_code(&p, &other),
            Err(PermutationError::DomainMismatch)
        );
    }

    #[test]
    fn test_relative_to_reordered_domain() {
        // The code follows the order of the supplied domain, not the permutation's own.
        let own = domain(3);
        let reversed = OrderedDomain::new(vec![3, 2, 1]).unwrap();
        let identity = Permutation::identity(&own);
        assert_eq!(lehmer_code(&identity, &reversed).unwrap().digits(), &[0, 0, 0]);

        let swap = Permutation::from_images(&own, vec![2, 1, 3]).unwrap();
        // Over [3, 2, 1]: 3 -> 3, 2 -> 1, 1 -> 2, i.e. positions [0, 2, 1]
        assert_eq!(lehmer_code(&swap, &reversed).unwrap().digits(), &[0, 1, 0]);
    }

    proptest! {
        #[test]
        fn test_matches_naive_count(positions in Just((0..9).collect::<Vec<usize>>()).prop_shuffle()) {
            let domain = domain(9);
            let p = Permutation::from_positions(&domain, positions.clone()).unwrap();
            let code = lehmer_code(&p, &domain).unwrap();
            let expected = naive_code(&positions);
            prop_assert_eq!(code.digits(), expected.as_slice());
            prop_assert_eq!(code.decode(&domain).unwrap(), p);
        }
    }
}
