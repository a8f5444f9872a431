//! Lexicographic ranks of permutations.
//!
//! A rank is the zero-based position of a permutation in lexicographic order,
//! an integer in `[0, n!)`. Ranks exceed 64 bits once `n >= 21`, so every
//! factorial weight and every rank is a [`BigUint`].

use std::hash::Hash;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_traits::{ToPrimitive as _, Zero as _};
use permutor_core::{OrderedDomain, Permutation, PermutationError};

use crate::LehmerCode;

/// Returns `n!`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use permutor_rank::factorial;
///
/// assert_eq!(factorial(0), BigUint::from(1_u32));
/// assert_eq!(factorial(5), BigUint::from(120_u32));
/// assert_eq!(
///     factorial(21).to_string(),
///     "51090942171709440000"
/// );
/// ```
#[must_use]
pub fn factorial(n: usize) -> BigUint {
    (1..=n).map(BigUint::from).product()
}

/// Returns `[0!, 1!, ..., (n - 1)!]`.
fn factorials_below(n: usize) -> Vec<BigUint> {
    let mut factorials = Vec::with_capacity(n);
    let mut current = BigUint::from(1_u32);
    for k in 0..n {
        if k > 0 {
            current *= k;
        }
        factorials.push(current.clone());
    }
    factorials
}

/// Returns the number of permutations of `domain`, `n!`.
#[must_use]
pub fn permutation_count<T>(domain: &OrderedDomain<T>) -> BigUint {
    factorial(domain.len())
}

impl LehmerCode {
    /// Interprets the digits in the factorial number system.
    ///
    /// Computes `Σ code[i] · (n - 1 - i)!` in Horner form.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use permutor_rank::LehmerCode;
    ///
    /// let code = LehmerCode::new(vec![3, 2, 1, 0])?;
    /// assert_eq!(code.to_rank(), BigUint::from(23_u32));
    /// # Ok::<(), permutor_core::PermutationError>(())
    /// ```
    #[must_use]
    pub fn to_rank(&self) -> BigUint {
        let n = self.len();
        let mut rank = BigUint::zero();
        for (i, &digit) in self.digits().iter().enumerate() {
            rank *= n - i;
            rank += digit;
        }
        rank
    }

    /// Writes `rank` in the factorial number system with `n` digits.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::InvalidRank`] if `rank >= n!`.
    pub fn from_rank(n: usize, rank: &BigUint) -> Result<Self, PermutationError> {
        let weights = factorials_below(n);
        let count = weights
            .last()
            .map_or_else(|| BigUint::from(1_u32), |weight| weight * n);
        if *rank >= count {
            return Err(invalid_rank(BigInt::from(rank.clone()), count));
        }

        let mut remainder = rank.clone();
        let digits = weights
            .iter()
            .rev()
            .map(|weight| {
                let (digit, rest) = remainder.div_rem(weight);
                remainder = rest;
                // rank < n! keeps digit i below n - i
                digit.to_usize().unwrap_or(usize::MAX)
            })
            .collect();
        Self::new(digits)
    }
}

fn invalid_rank(rank: BigInt, count: BigUint) -> PermutationError {
    log::debug!("rejecting rank {rank}: {count} permutations");
    PermutationError::InvalidRank { rank, count }
}

/// Returns the lexicographic rank of `p` among the permutations of `domain`.
///
/// # Errors
///
/// Returns [`PermutationError::DomainMismatch`] if `p` is not a permutation of
/// `domain`'s elements.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use permutor_core::{OrderedDomain, Permutation};
/// use permutor_rank::rank;
///
/// let domain = OrderedDomain::new(vec![1, 2, 3, 4])?;
/// let last = Permutation::from_images(&domain, vec![4, 3, 2, 1])?;
/// assert_eq!(rank(&Permutation::identity(&domain), &domain)?, BigUint::ZERO);
/// assert_eq!(rank(&last, &domain)?, BigUint::from(23_u32));
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
pub fn rank<T>(p: &Permutation<T>, domain: &OrderedDomain<T>) -> Result<BigUint, PermutationError>
where
    T: Eq + Hash,
{
    Ok(LehmerCode::of(p, domain)?.to_rank())
}

/// Returns the permutation of `domain` with lexicographic rank `rank`.
///
/// The rank is validated before any decoding work starts.
///
/// # Errors
///
/// Returns [`PermutationError::InvalidRank`] if `rank` is negative or not
/// smaller than `n!`.
///
/// # Examples
///
/// ```
/// use permutor_core::{OrderedDomain, PermutationError};
/// use permutor_rank::unrank;
///
/// let domain = OrderedDomain::new(vec![1, 2, 3, 4])?;
/// assert_eq!(unrank(&domain, 1)?.to_images(), vec![1, 2, 4, 3]);
/// assert!(matches!(unrank(&domain, 24), Err(PermutationError::InvalidRank { .. })));
/// assert!(matches!(unrank(&domain, -1), Err(PermutationError::InvalidRank { .. })));
/// # Ok::<(), PermutationError>(())
/// ```
pub fn unrank<T, R>(domain: &OrderedDomain<T>, rank: R) -> Result<Permutation<T>, PermutationError>
where
    R: Into<BigInt>,
{
    let rank = rank.into();
    let Ok(unsigned) = BigUint::try_from(&rank) else {
        return Err(invalid_rank(rank, permutation_count(domain)));
    };
    LehmerCode::from_rank(domain.len(), &unsigned)?.decode(domain)
}
