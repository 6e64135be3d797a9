//! XXH3 position strategy, behind the `xxhash` feature.

use xxhash_rust::xxh3::Xxh3;

use super::PositionHasher;

/// Position strategy using XXH3-64.
///
/// The fastest option for large items; non-cryptographic like
/// [`Crc64Hasher`](super::Crc64Hasher).
///
/// Requires the `xxhash` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct XxHasher;

impl XxHasher {
    /// Create a new XXH3 position hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PositionHasher for XxHasher {
    fn position(&self, salt: &[u8], item: &[u8], bit_count: usize) -> usize {
        let mut hasher = Xxh3::new();
        hasher.update(item);
        hasher.update(salt);
        (hasher.digest() % bit_count as u64) as usize
    }
}
