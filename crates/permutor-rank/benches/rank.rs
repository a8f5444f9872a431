//! Benchmarks for Lehmer-code ranking.
//!
//! # Benchmarks
//!
//! - **`rank`**: Ranks the lexicographically last permutation of domains of
//!   increasing size.
//! - **`unrank`**: Decodes the rank `n! / 2` for the same sizes.
//!
//! Sizes above 20 exercise ranks beyond the range of `u64`.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench rank
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use permutor_core::{OrderedDomain, Permutation};
use permutor_rank::{permutation_count, rank, unrank};

const SIZES: [u32; 4] = [8, 20, 64, 256];

fn domain(n: u32) -> OrderedDomain<u32> {
    OrderedDomain::new((0..n).collect()).unwrap()
}

fn bench_rank(c: &mut Criterion) {
    for n in SIZES {
        let domain = domain(n);
        let last = Permutation::from_images(&domain, (0..n).rev()).unwrap();
        c.bench_with_input(BenchmarkId::new("rank", n), &last, |b, last| {
            b.iter(|| rank(hint::black_box(last), &domain).unwrap());
        });
    }
}

fn bench_unrank(c: &mut Criterion) {
    for n in SIZES {
        let domain = domain(n);
        let middle = BigInt::from(permutation_count(&domain) / 2_u32);
        c.bench_with_input(BenchmarkId::new("unrank", n), &middle, |b, middle| {
            b.iter(|| unrank(&domain, hint::black_box(middle.clone())).unwrap());
        });
    }
}

criterion_group!(benches, bench_rank, bench_unrank);
criterion_main!(benches);
