use permutor_core::{OrderedDomain, Permutation, index::IndexArray};
use rand::{Rng, RngExt as _};

use crate::PermutationSeed;

/// Draws a uniformly random permutation of `domain` with a Fisher–Yates
/// shuffle.
///
/// For `i` from `n - 1` down to `1`, a uniform `j` in `[0, i]` is drawn from
/// `rng` and slots `i` and `j` are swapped. Given an unbiased source, each of
/// the `n!` permutations is equally likely. Domains of size 0 or 1 return the
/// identity without drawing from `rng`.
///
/// # Examples
///
/// ```
/// use permutor_core::OrderedDomain;
/// use permutor_generator::random_permutation;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let domain = OrderedDomain::new(vec![1, 2, 3, 4, 5])?;
/// let a = random_permutation(&domain, &mut Pcg64::seed_from_u64(42));
/// let b = random_permutation(&domain, &mut Pcg64::seed_from_u64(42));
/// assert_eq!(a, b);
///
/// let mut images = a.to_images();
/// images.sort_unstable();
/// assert_eq!(images, vec![1, 2, 3, 4, 5]);
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
pub fn random_permutation<T, R>(domain: &OrderedDomain<T>, rng: &mut R) -> Permutation<T>
where
    R: Rng + ?Sized,
{
    let mut indices = IndexArray::identity(domain.len());
    for i in (1..domain.len()).rev() {
        let j = rng.random_range(0..=i);
        if i != j {
            log::trace!("shuffle: swap {i} and {j}");
            indices.swap(i, j);
        }
    }
    Permutation::from_index_array(domain, indices)
}

/// A random permutation together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPermutation<T> {
    /// Seed that determines [`permutation`](Self::permutation).
    pub seed: PermutationSeed,
    /// The generated permutation.
    pub permutation: Permutation<T>,
}

/// Generator of uniformly random permutations over a fixed domain.
///
/// # Examples
///
/// ```
/// use permutor_core::OrderedDomain;
/// use permutor_generator::RandomPermutationGenerator;
///
/// let domain = OrderedDomain::new(vec!['a', 'b', 'c', 'd'])?;
/// let generator = RandomPermutationGenerator::new(&domain);
///
/// let generated = generator.generate();
/// let replayed = generator.generate_with_seed(generated.seed);
/// assert_eq!(generated, replayed);
/// # Ok::<(), permutor_core::PermutationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RandomPermutationGenerator<T> {
    domain: OrderedDomain<T>,
}

impl<T> RandomPermutationGenerator<T> {
    /// Creates a generator for `domain`.
    #[must_use]
    pub fn new(domain: &OrderedDomain<T>) -> Self {
        Self {
            domain: domain.clone(),
        }
    }

    /// Returns the domain permutations are drawn over.
    #[must_use]
    pub fn domain(&self) -> &OrderedDomain<T> {
        &self.domain
    }

    /// Generates a permutation from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPermutation<T> {
        self.generate_with_seed(PermutationSeed::random())
    }

    /// Generates the permutation determined by `seed`.
    ///
    /// The same seed and domain size always produce the same permutation.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PermutationSeed) -> GeneratedPermutation<T> {
        log::debug!("generating permutation of {} elements, seed={seed}", self.domain.len());
        let permutation = random_permutation(&self.domain, &mut seed.to_rng());
        GeneratedPermutation { seed, permutation }
    }

    /// Generates a permutation from a caller-supplied random source.
    #[must_use]
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Permutation<T>
    where
        R: Rng + ?Sized,
    {
        random_permutation(&self.domain, rng)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, convert::Infallible};

    use rand::{SeedableRng as _, TryRng};
    use rand_pcg::Pcg64;

    use super::*;

    fn domain(n: u32) -> OrderedDomain<u32> {
        OrderedDomain::new((1..=n).collect()).unwrap()
    }

    /// A source that fails the test if it is ever drawn from.
    struct Untouchable;

    impl TryRng for Untouchable {
        type Error = Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            panic!("rng must not be used");
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            panic!("rng must not be used");
        }

        fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
            panic!("rng must not be used");
        }
    }

    #[test]
    fn test_small_domains_skip_rng() {
        for n in 0..=1 {
            let domain = domain(n);
            let p = random_permutation(&domain, &mut Untouchable);
            assert_eq!(p, Permutation::identity(&domain));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let domain = domain(12);
        let a = random_permutation(&domain, &mut Pcg64::seed_from_u64(7));
        let b = random_permutation(&domain, &mut Pcg64::seed_from_u64(7));
        assert_eq!(a, b);

        let generator = RandomPermutationGenerator::new(&domain);
        let seed = PermutationSeed::from([3; 32]);
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
        assert_eq!(generator.generate_with_seed(seed).seed, seed);
    }

    #[test]
    fn test_different_seeds_differ() {
        let domain = domain(12);
        let a = random_permutation(&domain, &mut Pcg64::seed_from_u64(1));
        let b = random_permutation(&domain, &mut Pcg64::seed_from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_image_is_domain() {
        let domain = domain(20);
        let generator = RandomPermutationGenerator::new(&domain);
        let mut rng = Pcg64::seed_from_u64(99);
        for _ in 0..50 {
            let mut images = generator.generate_with_rng(&mut rng).to_images();
            images.sort_unstable();
            assert_eq!(images, domain.elements());
        }
    }

    #[test]
    fn test_roughly_uniform() {
        // 6 permutations of 3 elements, 6000 draws: each count should be near 1000
        let domain = domain(3);
        let mut rng = Pcg64::seed_from_u64(2024);
        let mut counts = HashMap::new();
        for _ in 0..6000 {
            let p = random_permutation(&domain, &mut rng);
            *counts.entry(p.to_images()).or_insert(0_u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (images, count) in counts {
            assert!((850..=1150).contains(&count), "{images:?} drawn {count} times");
        }
    }

    #[test]
    fn test_works_with_dyn_rng() {
        let domain = domain(5);
        let mut rng = Pcg64::seed_from_u64(5);
        let rng: &mut dyn Rng = &mut rng;
        let p = random_permutation(&domain, rng);
        assert_eq!(p.len(), 5);
    }
}
