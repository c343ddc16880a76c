//! Deterministic seeding for reproducible training runs.

use std::{fmt, num::ParseIntError, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 128-bit seed for the session's random number generator.
///
/// Using the same seed reproduces an entire training run bit-for-bit:
/// network initialization, pipe spawns, and breeding all draw from one
/// generator seeded here.
///
/// The textual form is a 32-character lowercase hex string, used both for
/// serialization and for CLI arguments.
///
/// # Example
///
/// ```
/// use fledge_engine::seed::SimulationSeed;
///
/// let seed: SimulationSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSeed(u128);

/// Error parsing a [`SimulationSeed`] from its hex form.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 32 characters long.
    #[display("seed must be 32 hex characters, got {length}")]
    InvalidLength {
        /// Length of the rejected input.
        #[error(not(source))]
        length: usize,
    },
    /// The input contains non-hex characters.
    #[display("seed contains invalid hex: {source}")]
    InvalidHex {
        /// The underlying integer parsing error.
        source: ParseIntError,
    },
}

impl SimulationSeed {
    /// Creates a seed from raw bytes, big-endian.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Returns the seed as raw bytes, big-endian.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for SimulationSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for SimulationSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { length: s.len() });
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|source| ParseSeedError::InvalidHex { source })?;
        Ok(Self(num))
    }
}

impl Serialize for SimulationSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SimulationSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random seeds with `rng.random()`.
impl Distribution<SimulationSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationSeed {
        SimulationSeed(rng.random())
    }
}
