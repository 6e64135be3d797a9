//! SHA-256 position strategy.

use sha2::{Digest, Sha256};

use super::PositionHasher;

/// Cryptographic position strategy using SHA-256.
///
/// Slower than [`Crc64Hasher`](super::Crc64Hasher) but resistant to
/// adversarially chosen items: without the salts an attacker cannot craft
/// inputs that collide into the same positions. The first 8 digest bytes
/// are interpreted as a big-endian `u64` and reduced modulo the bit count.
///
/// # Examples
///
/// ```
/// use saltbloom::{SaltedBloomFilter, hash::Sha256Hasher};
///
/// let filter = SaltedBloomFilter::with_hasher(800, 5, Sha256Hasher::new())?;
/// filter.put(b"alpha");
/// assert!(filter.check(b"alpha"));
/// # Ok::<(), saltbloom::FilterError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    /// Create a new SHA-256 position hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PositionHasher for Sha256Hasher {
    fn position(&self, salt: &[u8], item: &[u8], bit_count: usize) -> usize {
        // Digest of salt followed by item.
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(item);
        let digest = hasher.finalize();

        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(prefix) % bit_count as u64) as usize
    }
}
