//! Lehmer codes and lexicographic ranks for permutations.
//!
//! This crate converts between [`Permutation`] values and their position in
//! lexicographic order, using the factorial number system as the bridge.
//!
//! # Overview
//!
//! - [`LehmerCode`]: digit `i` counts the later slots mapped below slot `i`;
//!   it is the rank written in factorial base.
//! - [`rank`] / [`unrank`]: exact conversion between a permutation and an
//!   arbitrary-precision rank in `[0, n!)`.
//! - [`factorial`] / [`permutation_count`]: factorials as [`BigUint`].
//!
//! [`Permutation`]: permutor_core::Permutation
//! [`BigUint`]: num_bigint::BigUint
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use permutor_core::OrderedDomain;
//! use permutor_rank::{lehmer_code, rank, unrank};
//!
//! let domain = OrderedDomain::new(vec!['w', 'x', 'y', 'z'])?;
//!
//! let p = unrank(&domain, 17)?;
//! assert_eq!(p.to_images(), vec!['y', 'z', 'x', 'w']);
//! assert_eq!(lehmer_code(&p, &domain)?.digits(), &[2, 2, 1, 0]);
//! assert_eq!(rank(&p, &domain)?, BigUint::from(17_u32));
//! # Ok::<(), permutor_core::PermutationError>(())
//! ```

mod fenwick;
mod lehmer;
mod rank;

pub use self::{
    lehmer::{LehmerCode, from_lehmer_code, lehmer_code},
    rank::{factorial, permutation_count, rank, unrank},
};
