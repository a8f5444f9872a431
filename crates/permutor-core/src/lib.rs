//! Core data structures for permutation engines.
//!
//! This crate provides the value types shared by ranking, enumeration, and
//! random generation of permutations over an arbitrary finite ordered domain.
//!
//! # Overview
//!
//! - [`domain`]: [`OrderedDomain`], an immutable sequence of distinct elements
//!   with O(1) lookups between elements and positions.
//! - [`permutation`]: [`Permutation`], a bijection of a domain onto itself,
//!   backed by forward and inverse position arrays.
//! - [`index`]: [`IndexArray`] and the in-place lexicographic step shared by
//!   every enumeration routine.
//! - [`error`]: [`PermutationError`], the error type of all permutor crates.
//!
//! [`IndexArray`]: index::IndexArray
//!
//! # Examples
//!
//! ```
//! use permutor_core::{OrderedDomain, Permutation, index::IndexArray};
//!
//! let domain = OrderedDomain::new(vec!["a", "b", "c"])?;
//!
//! let mut indices = IndexArray::identity(domain.len());
//! assert!(indices.advance());
//!
//! let p = Permutation::from_index_array(&domain, indices);
//! assert_eq!(p.to_images(), vec!["a", "c", "b"]);
//! # Ok::<(), permutor_core::PermutationError>(())
//! ```

pub mod domain;
pub mod error;
pub mod index;
pub mod permutation;

// Re-export commonly used types
pub use self::{domain::OrderedDomain, error::PermutationError, permutation::Permutation};
