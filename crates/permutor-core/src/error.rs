//! Error type shared by the permutor crates.

use num_bigint::{BigInt, BigUint};

/// Errors reported by permutation construction, ranking, and stepping.
///
/// Every operation validates its inputs on entry and fails before doing any
/// work, so an error never leaves partial state behind.
///
/// # Examples
///
/// ```
/// use permutor_core::{OrderedDomain, PermutationError};
///
/// let result = OrderedDomain::new(vec!['a', 'b', 'a']);
/// assert_eq!(
///     result.unwrap_err(),
///     PermutationError::DuplicateElement { first: 0, second: 2 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PermutationError {
    /// A rank was negative or not smaller than `n!`.
    #[display("rank {rank} is out of range for {count} permutations")]
    InvalidRank {
        /// The rejected rank.
        rank: BigInt,
        /// The number of permutations of the domain (`n!`).
        count: BigUint,
    },
    /// A permutation (or code) does not belong to the supplied domain.
    #[display("permutation domain does not match the supplied domain")]
    DomainMismatch,
    /// The same element appears twice in a domain.
    #[display("duplicate domain element at positions {first} and {second}")]
    DuplicateElement {
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },
    /// A position array is not a permutation of `0..n`.
    #[display("position array is not a permutation of 0..{len}")]
    InvalidPositions {
        /// Length of the rejected array.
        len: usize,
    },
    /// A Lehmer code digit exceeds its place value limit.
    #[display("Lehmer code digit {digit} at index {index} exceeds {max}")]
    InvalidLehmerCode {
        /// Index of the offending digit.
        index: usize,
        /// The offending digit.
        digit: usize,
        /// Largest digit allowed at `index` (`n - 1 - index`).
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PermutationError::InvalidRank {
            rank: BigInt::from(-1),
            count: BigUint::from(24_u32),
        };
        assert_eq!(err.to_string(), "rank -1 is out of range for 24 permutations");

        assert_eq!(
            PermutationError::DomainMismatch.to_string(),
            "permutation domain does not match the supplied domain"
        );
        assert_eq!(
            PermutationError::DuplicateElement { first: 1, second: 3 }.to_string(),
            "duplicate domain element at positions 1 and 3"
        );
        assert_eq!(
            PermutationError::InvalidLehmerCode {
                index: 0,
                digit: 4,
                max: 3
            }
            .to_string(),
            "Lehmer code digit 4 at index 0 exceeds 3"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&PermutationError::InvalidPositions { len: 3 });
    }
}
