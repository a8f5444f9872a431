use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 256-bit seed for reproducible random permutations.
///
/// The seed is printed and parsed as 64 lowercase hexadecimal digits, so a
/// generated permutation can be recreated from its logged seed.
///
/// # Examples
///
/// ```
/// use permutor_generator::PermutationSeed;
///
/// let text = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: PermutationSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), permutor_generator::PermutationSeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationSeed([u8; 32]);

impl PermutationSeed {
    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Draws a seed from `rng`.
    #[must_use]
    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut bytes = [0; 32];
        rng.fill(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the generator this seed determines.
    #[must_use]
    pub fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for PermutationSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PermutationSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`PermutationSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PermutationSeedParseError {
    /// The input is not exactly 64 bytes long.
    #[display("seed must be 64 hex digits, got {len} bytes")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit at index {index}")]
    InvalidDigit {
        /// Index of the offending character.
        index: usize,
    },
}

impl FromStr for PermutationSeed {
    type Err = PermutationSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.as_bytes();
        if s.len() != 64 {
            return Err(PermutationSeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let high = hex_value(s[2 * i]).ok_or(PermutationSeedParseError::InvalidDigit {
                index: 2 * i,
            })?;
            let low = hex_value(s[2 * i + 1]).ok_or(PermutationSeedParseError::InvalidDigit {
                index: 2 * i + 1,
            })?;
            *byte = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rand::{RngExt as _, SeedableRng as _};

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed = PermutationSeed::from_str(SEED).unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        // Uppercase input is accepted, output is always lowercase
        let upper = PermutationSeed::from_str(&SEED.to_uppercase()).unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PermutationSeed::from_str("abc"),
            Err(PermutationSeedParseError::InvalidLength { len: 3 })
        );

        // Length counts bytes: 32 two-byte characters are 64 bytes but not hex
        let wide = "é".repeat(32);
        assert_eq!(
            PermutationSeed::from_str(&wide),
            Err(PermutationSeedParseError::InvalidDigit { index: 0 })
        );
        let err = PermutationSeed::from_str(&"é".repeat(3)).unwrap_err();
        assert_eq!(err, PermutationSeedParseError::InvalidLength { len: 6 });
        assert_eq!(err.to_string(), "seed must be 64 hex digits, got 6 bytes");

        let mut bad = SEED.to_owned();
        bad.replace_range(5..6, "g");
        assert_eq!(
            PermutationSeed::from_str(&bad),
            Err(PermutationSeedParseError::InvalidDigit { index: 5 })
        );
    }

    #[test]
    fn test_to_rng_is_reproducible() {
        let seed = PermutationSeed::from([7; 32]);
        let a: [u64; 4] = seed.to_rng().random();
        let b: [u64; 4] = seed.to_rng().random();
        assert_eq!(a, b);

        let other: [u64; 4] = PermutationSeed::from([8; 32]).to_rng().random();
        assert_ne!(a, other);
    }

    #[test]
    fn test_random_seeds_differ() {
        let mut rng = Pcg64::seed_from_u64(0);
        let a = PermutationSeed::from_rng(&mut rng);
        let b = PermutationSeed::from_rng(&mut rng);
        assert_ne!(a, b);
        assert_ne!(PermutationSeed::random(), PermutationSeed::random());
    }
}
