//! Enumeration, stepping, and random generation of permutations.
//!
//! This crate walks the permutations of an [`OrderedDomain`] in
//! lexicographic order and draws uniformly random ones.
//!
//! # Overview
//!
//! - [`Permutations`]: lazy iterator over all `n!` permutations, from the
//!   identity to the order-reversing permutation.
//! - [`successor`] / [`predecessor`]: a single lexicographic step from a given
//!   permutation, sharing the iterator's index step.
//! - [`random_permutation`]: Fisher–Yates shuffle driven by a caller-supplied
//!   random source.
//! - [`RandomPermutationGenerator`] and [`PermutationSeed`]: reproducible
//!   random permutations from printable seeds.
//!
//! [`OrderedDomain`]: permutor_core::OrderedDomain
//!
//! # Examples
//!
//! ```
//! use permutor_core::{OrderedDomain, Permutation};
//! use permutor_generator::{permutations, successor};
//!
//! let domain = OrderedDomain::new(vec!["x", "y", "z"])?;
//!
//! let mut current = Permutation::identity(&domain);
//! for expected in permutations(&domain).skip(1) {
//!     current = successor(&current, &domain)?.unwrap();
//!     assert_eq!(current, expected);
//! }
//! assert_eq!(successor(&current, &domain)?, None);
//! # Ok::<(), permutor_core::PermutationError>(())
//! ```

pub use self::{
    permutations::{Permutations, permutations},
    random::{GeneratedPermutation, RandomPermutationGenerator, random_permutation},
    seed::{PermutationSeed, PermutationSeedParseError},
    successor::{predecessor, successor},
};

mod permutations;
mod random;
mod seed;
mod successor;
