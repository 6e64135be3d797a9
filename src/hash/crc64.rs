//! CRC-64 position strategy, the crate default.

use crc::{Crc, CRC_64_ECMA_182};

use super::PositionHasher;

/// The CRC-64/ECMA-182 algorithm table, built once.
const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_ECMA_182);

/// Fast checksum-based position strategy using CRC-64/ECMA-182.
///
/// CRC-64 is not a cryptographic hash, but it is cheap, deterministic, and
/// spreads well enough over random salts for membership testing. This is
/// the default strategy; use [`Sha256Hasher`](super::Sha256Hasher) when a
/// cryptographic digest is required.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::{Crc64Hasher, PositionHasher};
///
/// let hasher = Crc64Hasher::new();
/// let pos = hasher.position(b"salt", b"item", 800);
/// assert!(pos < 800);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc64Hasher;

impl Crc64Hasher {
    /// Create a new CRC-64 position hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PositionHasher for Crc64Hasher {
    fn position(&self, salt: &[u8], item: &[u8], bit_count: usize) -> usize {
        // Checksum of item followed by salt.
        let mut digest = CRC64.digest();
        digest.update(item);
        digest.update(salt);
        (digest.finalize() % bit_count as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_varies_position() {
        let hasher = Crc64Hasher::new();
        let positions: std::collections::HashSet<usize> = (0u8..64)
            .map(|i| hasher.position(&[i; 16], b"item", 1 << 20))
            .collect();
        // 64 salts collapsing to few positions over a million-bit space
        // would mean the salt bytes are not reaching the checksum.
        assert!(positions.len() > 32);
    }

    #[test]
    fn test_item_varies_position() {
        let hasher = Crc64Hasher::new();
        let a = hasher.position(&[1; 16], b"alpha", 1 << 20);
        let b = hasher.position(&[1; 16], b"beta", 1 << 20);
        let c = hasher.position(&[1; 16], b"gamma", 1 << 20);
        assert!(a != b || b != c);
    }

    #[test]
    fn test_empty_item() {
        let hasher = Crc64Hasher::new();
        let pos = hasher.position(&[9; 16], b"", 100);
        assert!(pos < 100);
    }

    #[test]
    fn test_single_bit_space() {
        let hasher = Crc64Hasher::new();
        assert_eq!(hasher.position(&[3; 16], b"anything", 1), 0);
    }
}
