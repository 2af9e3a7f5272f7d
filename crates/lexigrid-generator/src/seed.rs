//! Reproducibility seeds for board generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated board.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits, so a board
/// can be reproduced from a logged seed string. Besides parsing, seeds come
/// from system entropy ([`from_entropy`](Self::from_entropy)) or from an
/// arbitrary phrase hashed with SHA-256
/// ([`from_phrase`](Self::from_phrase)).
///
/// # Examples
///
/// ```
/// use lexigrid_generator::BoardSeed;
///
/// let seed: BoardSeed =
///     "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
/// );
///
/// // The same phrase always hashes to the same seed.
/// assert_eq!(
///     BoardSeed::from_phrase("tuesday puzzle"),
///     BoardSeed::from_phrase("tuesday puzzle")
/// );
/// # Ok::<(), lexigrid_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed {
    bytes: [u8; 32],
}

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Creates a fresh seed from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self { bytes }
    }

    /// Creates a seed by hashing an arbitrary phrase with SHA-256.
    ///
    /// Lets users pick memorable seed strings while still exercising the
    /// full 32-byte seed space.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            bytes: Sha256::digest(phrase.as_bytes()).into(),
        }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a seed from a hex string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The input was not exactly 64 hex digits long.
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contained a character that is not a hex digit.
    InvalidDigit {
        /// Position of the rejected character.
        index: usize,
    },
}

impl Display for ParseSeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "seed must be 64 hex digits, got {len} characters")
            }
            Self::InvalidDigit { index } => {
                write!(f, "seed contains a non-hex character at position {index}")
            }
        }
    }
}

impl std::error::Error for ParseSeedError {}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    /// Parses a seed from 64 hex digits. Both hex digit cases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.as_bytes();
        if digits.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: digits.len() });
        }
        let mut bytes = [0; 32];
        for (i, pair) in digits.chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or(ParseSeedError::InvalidDigit { index: 2 * i })?;
            let lo = hex_value(pair[1]).ok_or(ParseSeedError::InvalidDigit { index: 2 * i + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self { bytes })
    }
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
