//! Join code value object

use rand::Rng;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default number of characters in a generated join code
pub const DEFAULT_JOIN_CODE_LENGTH: usize = 6;

/// Opaque, case-sensitive code a client presents to address a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a random lowercase base-36 code of the given length
    pub fn random(rng: &mut impl Rng, length: usize) -> Self {
        let code = (0..length.max(1))
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Number of distinct codes of the given length, if it fits in `usize`
    pub fn space_size(length: usize) -> Option<usize> {
        u32::try_from(length.max(1))
            .ok()
            .and_then(|exp| ALPHABET.len().checked_pow(exp))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JoinCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for JoinCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}
