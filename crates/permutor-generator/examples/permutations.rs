//! Example demonstrating enumeration, ranking, and random permutations.
//!
//! This example shows how to:
//! - Enumerate the permutations of `[1, ..., n]` with their ranks and Lehmer codes
//! - Decode a rank back into a permutation and step to its neighbours
//! - Generate a reproducible random permutation from a seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example permutations -- --size 4
//! ```
//!
//! Decode a specific rank (arbitrary precision):
//!
//! ```sh
//! cargo run --example permutations -- --size 30 --rank 123456789012345678901234567890
//! ```
//!
//! Replay a random permutation from a printed seed:
//!
//! ```sh
//! cargo run --example permutations -- --size 10 --random --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```

use std::process;

use clap::Parser;
use num_bigint::BigInt;
use permutor_core::{OrderedDomain, Permutation, PermutationError};
use permutor_generator::{
    PermutationSeed, RandomPermutationGenerator, permutations, predecessor, successor,
};
use permutor_rank::{lehmer_code, permutation_count, rank, unrank};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of elements in the domain `[1, ..., n]`.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 4)]
    size: u32,

    /// Maximum number of permutations to list.
    #[arg(long, value_name = "COUNT", default_value_t = 24)]
    limit: usize,

    /// Decode this rank instead of listing permutations.
    #[arg(long, value_name = "RANK", allow_negative_numbers = true)]
    rank: Option<BigInt>,

    /// Generate a random permutation instead of listing permutations.
    #[arg(long)]
    random: bool,

    /// Seed for `--random` (64 hex digits). A fresh seed is drawn if omitted.
    #[arg(long, value_name = "SEED", requires = "random")]
    seed: Option<PermutationSeed>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let domain = match OrderedDomain::new((1..=args.size).collect()) {
        Ok(domain) => domain,
        Err(err) => {
            eprintln!("Invalid domain: {err}");
            process::exit(2);
        }
    };

    let result = if args.random {
        print_random(&domain, args.seed)
    } else if let Some(r) = args.rank {
        print_unranked(&domain, r)
    } else {
        print_listing(&domain, args.limit)
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn print_listing(domain: &OrderedDomain<u32>, limit: usize) -> Result<(), PermutationError> {
    println!("Domain size: {}", domain.len());
    println!("Permutations: {}", permutation_count(domain));
    println!();

    for p in permutations(domain).take(limit) {
        let code = lehmer_code(&p, domain)?;
        println!("  {:>6}  {p}  code={:?}", rank(&p, domain)?, code.digits());
    }
    Ok(())
}

fn print_unranked(domain: &OrderedDomain<u32>, r: BigInt) -> Result<(), PermutationError> {
    let p = unrank(domain, r)?;
    println!("Permutation:");
    println!("  {p}");
    println!("Lehmer code:");
    println!("  {:?}", lehmer_code(&p, domain)?.digits());
    println!();

    print_neighbour("Predecessor", predecessor(&p, domain)?.as_ref(), domain)?;
    print_neighbour("Successor", successor(&p, domain)?.as_ref(), domain)?;
    Ok(())
}

fn print_neighbour(
    label: &str,
    p: Option<&Permutation<u32>>,
    domain: &OrderedDomain<u32>,
) -> Result<(), PermutationError> {
    println!("{label}:");
    match p {
        Some(p) => println!("  {p}  rank={}", rank(p, domain)?),
        None => println!("  (none)"),
    }
    Ok(())
}

fn print_random(
    domain: &OrderedDomain<u32>,
    seed: Option<PermutationSeed>,
) -> Result<(), PermutationError> {
    let generator = RandomPermutationGenerator::new(domain);
    let generated = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Permutation:");
    println!("  {}", generated.permutation);
    println!("Rank:");
    println!("  {}", rank(&generated.permutation, domain)?);
    Ok(())
}
