//! Hash position strategies and salt generation.
//!
//! A Bloom filter needs `k` independent hash functions. Instead of `k`
//! distinct algorithms, this crate runs one algorithm over `k` distinct
//! random salts mixed with the item bytes: each salt induces a separate
//! pseudo-independent position function over the same bit space.
//!
//! The algorithm itself is pluggable through [`PositionHasher`]:
//!
//! * [`Crc64Hasher`]: CRC-64/ECMA checksum, the fast default;
//! * [`Sha256Hasher`]: SHA-256, for callers that want a cryptographic
//!   digest backing positions;
//! * `XxHasher`: XXH3, behind the `xxhash` feature.
//!
//! All strategies are deterministic for a given `(salt, item)` pair, which
//! is what makes `check` find the bits `put` wrote.

mod crc64;
mod sha256;
#[cfg(feature = "xxhash")]
mod xxhash;

pub use crc64::Crc64Hasher;
pub use sha256::Sha256Hasher;
#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

use rand::rngs::OsRng;
use rand::RngCore;

/// Width of each generated salt in bytes.
pub const SALT_LEN: usize = 16;

/// Maps a `(salt, item)` pair to a bit position.
///
/// Implementations must be deterministic: the same inputs always produce
/// the same position. The returned position is already reduced into
/// `[0, bit_count)`, so callers can index the bit array directly.
///
/// # Implementing
///
/// Mix the salt and item bytes through the digest, take a 64-bit value from
/// the result, and reduce it modulo `bit_count`. Reducing modulo the full
/// bit count (rather than the byte count) keeps every bit of the array
/// reachable with uniform probability.
pub trait PositionHasher: Send + Sync {
    /// Compute the bit position for `item` under `salt`.
    ///
    /// `bit_count` is guaranteed non-zero by the filter.
    fn position(&self, salt: &[u8], item: &[u8], bit_count: usize) -> usize;
}

/// Generate `count` distinct random salts.
///
/// Salts are drawn from the operating system's entropy source
/// ([`OsRng`]), so every filter instance gets its own independent salt set
/// with no shared or time-derived state. Duplicates are redrawn; with
/// 128-bit salts a collision is vanishingly unlikely, but the distinctness
/// of the salt set is what the hash independence argument rests on.
pub(crate) fn generate_salts(count: usize) -> Box<[[u8; SALT_LEN]]> {
    let mut salts: Vec<[u8; SALT_LEN]> = Vec::with_capacity(count);
    while salts.len() < count {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        if !salts.contains(&salt) {
            salts.push(salt);
        }
    }
    salts.into_boxed_slice()
}
