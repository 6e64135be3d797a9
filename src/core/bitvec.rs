//! Fixed-size byte-backed bit array.
//!
//! This module provides the membership mask underlying the filter: a
//! zero-initialized, fixed-length sequence of bytes addressed bit by bit.
//!
//! # Bit Addressing
//!
//! Bit position `p` maps to byte index `p / 8` and bit offset `p % 8`:
//!
//! ```text
//! Byte 0: [bit 0][bit 1]...[bit 7]
//! Byte 1: [bit 8][bit 9]...[bit 15]
//! Byte 2: [bit 16]...
//! ```
//!
//! A position must select both a byte and a bit within it. Reducing a hash
//! only modulo the byte length and reusing its low three bits as the offset
//! restricts each byte-collision class to eight offsets and skews the
//! distribution; callers are expected to reduce modulo the total *bit* count
//! before indexing here.
//!
//! # Thread Safety
//!
//! `BitVec` itself is plain data. The filter wraps it in a reader/writer lock
//! so that `set` runs under exclusive access and `get` under shared access;
//! see [`crate::filters::SaltedBloomFilter`].
//!
//! # Examples
//!
//! ```
//! use saltbloom::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! ```

use crate::error::{FilterError, Result};

/// Fixed-size bit array backed by `Box<[u8]>`.
///
/// Allocated once at construction with `ceil(len / 8)` bytes, all zero.
/// Bits are monotonic: [`set`](BitVec::set) only ever ORs a bit to 1; there
/// is no clearing operation, matching the insert-only union semantics of the
/// filter built on top.
#[derive(Debug, Clone)]
pub struct BitVec {
    /// Backing bytes, each storing 8 bits.
    bytes: Box<[u8]>,

    /// Total number of addressable bits.
    len: usize,
}

impl BitVec {
    /// Create a new bit vector with the specified number of bits.
    ///
    /// All bits are initialized to 0. The number of bytes allocated is
    /// `ceil(num_bits / 8)`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfiguration`] if `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(800).unwrap();
    /// assert_eq!(bv.len(), 800);
    /// assert_eq!(bv.byte_len(), 100);
    /// assert_eq!(bv.count_ones(), 0);
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(FilterError::invalid_configuration(
                "bit count must be greater than 0",
            ));
        }

        let num_bytes = (num_bits + 7) / 8;
        Ok(Self {
            bytes: vec![0u8; num_bytes].into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Get the number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check whether the bit vector has zero bits.
    ///
    /// Always `false` for a successfully constructed `BitVec`; provided for
    /// API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of backing bytes, `ceil(len / 8)`.
    #[must_use]
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Set the bit at `index` to 1.
    ///
    /// Idempotent: setting an already-set bit has no further effect, and no
    /// other bit is ever modified (bitwise OR).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching standard library indexing behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::bitvec::BitVec;
    ///
    /// let mut bv = BitVec::new(16).unwrap();
    /// bv.set(9);
    /// bv.set(9); // idempotent
    /// assert!(bv.get(9));
    /// assert_eq!(bv.count_ones(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let byte_idx = index / 8;
        let bit_offset = index % 8;
        self.bytes[byte_idx] |= 1u8 << bit_offset;
    }

    /// Get the bit value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let byte_idx = index / 8;
        let bit_offset = index % 8;
        (self.bytes[byte_idx] & (1u8 << bit_offset)) != 0
    }

    /// Count the number of bits set to 1.
    ///
    /// # Time Complexity
    ///
    /// O(len / 8): iterates the backing bytes using `u8::count_ones`.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Get total memory usage in bytes, including the struct itself.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bytes.len() + std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bv = BitVec::new(100).unwrap();
        assert_eq!(bv.len(), 100);
        assert_eq!(bv.byte_len(), 13); // ceil(100/8)
        assert!(!bv.is_empty());
        assert_eq!(bv.count_ones(), 0);
    }

    #[test]
    fn test_new_zero_bits_error() {
        let result = BitVec::new(0);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_exact_byte_multiple() {
        let bv = BitVec::new(64).unwrap();
        assert_eq!(bv.byte_len(), 8);

        let bv = BitVec::new(65).unwrap();
        assert_eq!(bv.byte_len(), 9);
    }

    #[test]
    fn test_set_get() {
        let mut bv = BitVec::new(128).unwrap();
        assert!(!bv.get(0));

        bv.set(0);
        bv.set(7);
        bv.set(8);
        bv.set(127);

        assert!(bv.get(0));
        assert!(bv.get(7));
        assert!(bv.get(8));
        assert!(bv.get(127));
        assert!(!bv.get(64));
    }

    #[test]
    fn test_set_idempotent() {
        let mut bv = BitVec::new(64).unwrap();
        bv.set(10);
        bv.set(10);
        bv.set(10);
        assert_eq!(bv.count_ones(), 1);
    }

    #[test]
    fn test_set_does_not_disturb_neighbors() {
        let mut bv = BitVec::new(16).unwrap();
        bv.set(3);
        bv.set(4);

        // Bits 3 and 4 share a byte with bits 0..=7.
        assert!(bv.get(3));
        assert!(bv.get(4));
        for i in [0, 1, 2, 5, 6, 7] {
            assert!(!bv.get(i), "bit {} should be untouched", i);
        }
    }

    #[test]
    fn test_count_ones() {
        let mut bv = BitVec::new(100).unwrap();
        assert_eq!(bv.count_ones(), 0);

        bv.set(0);
        bv.set(50);
        bv.set(99);
        assert_eq!(bv.count_ones(), 3);
    }

    #[test]
    fn test_byte_boundary_conditions() {
        let mut bv = BitVec::new(17).unwrap();

        bv.set(7); // last bit of byte 0
        bv.set(8); // first bit of byte 1
        bv.set(16); // first bit of byte 2 (partial byte)

        assert!(bv.get(7));
        assert!(bv.get(8));
        assert!(bv.get(16));
        assert_eq!(bv.count_ones(), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds() {
        let mut bv = BitVec::new(64).unwrap();
        bv.set(64);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let bv = BitVec::new(64).unwrap();
        let _ = bv.get(100);
    }

    #[test]
    fn test_clone_independence() {
        let mut bv1 = BitVec::new(64).unwrap();
        bv1.set(10);

        let bv2 = bv1.clone();
        assert!(bv2.get(10));

        bv1.set(20);
        assert!(!bv2.get(20));
    }

    #[test]
    fn test_memory_usage() {
        let bv = BitVec::new(800).unwrap();
        assert!(bv.memory_usage() >= 100);
    }
}
