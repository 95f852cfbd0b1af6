//! Order identifiers.
//!
//! Orders are never stored, so there is no sequence to draw IDs from. An ID is
//! the creation time in milliseconds plus a random suffix, both base-36:
//!
//! ```text
//! ord_mg5x2k1c_4fz0q9ab
//!     ^^^^^^^^ ^^^^^^^^
//!     millis   random
//! ```
//!
//! Uniqueness is statistical: two IDs collide only if they are minted in the
//! same millisecond and draw the same 8 random characters (1 in 36^8).

use core::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "ord_";
const SUFFIX_LEN: usize = 8;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a synthesized order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Mint a new ID for an order created now.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_at(Utc::now(), &mut rand::rng())
    }

    /// Mint an ID for an order created at `created_at`, drawing the suffix from `rng`.
    #[must_use]
    pub fn generate_at<R: Rng + ?Sized>(created_at: DateTime<Utc>, rng: &mut R) -> Self {
        let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();

        Self(format!("{PREFIX}{}_{suffix}", to_base36(millis)))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        #[allow(clippy::cast_possible_truncation)] // n % 36 < 36
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
