//! Salted multi-hash Bloom filter with reader/writer locking.

use parking_lot::RwLock;

use crate::core::bitvec::BitVec;
use crate::core::filter::MembershipFilter;
use crate::error::{FilterError, Result};
use crate::hash::{generate_salts, Crc64Hasher, PositionHasher, SALT_LEN};

/// Cell rendered for a set bit in [`SaltedBloomFilter::bitmap`].
const CELL_SET: char = '▨';

/// Cell rendered for a clear bit.
const CELL_CLEAR: char = '□';

/// Bits per rendered bitmap row.
const BITMAP_ROW_BITS: usize = 64;

/// A Bloom filter deriving its hash family from per-instance random salts.
///
/// Instead of `k` different hash algorithms, the filter draws `k` distinct
/// 128-bit salts from the operating system's entropy source at construction
/// and runs a single algorithm over each `(salt, item)` pair. Each salt
/// induces an independent position function over the same bit array, so
/// `put` sets `k` bits and `check` requires all `k` to be set.
///
/// The position algorithm is pluggable through the type parameter; the
/// default is [`Crc64Hasher`], with [`Sha256Hasher`](crate::hash::Sha256Hasher)
/// available when positions must come from a cryptographic digest.
///
/// # Guarantees
///
/// * **No false negatives**: every item passed to `put` is reported present
///   by `check` for the filter's entire lifetime.
/// * **False positives possible**: unrelated items may collide into already
///   set bits. Size the filter with [`estimate`](crate::core::params::estimate)
///   to bound the rate.
/// * **Insert-only**: bits are never cleared; there is no removal.
///
/// # Thread Safety
///
/// The bit array sits behind a [`parking_lot::RwLock`]: `put` takes the
/// write guard for the whole k-bit update, `check` takes the read guard, so
/// concurrent readers proceed in parallel and never observe a partial
/// insert. Salts and the hasher are immutable after construction and need
/// no synchronization.
///
/// # Examples
///
/// ```
/// use saltbloom::SaltedBloomFilter;
///
/// let filter = SaltedBloomFilter::new(800, 5)?;
/// filter.put(b"alpha");
/// filter.put(b"beta");
///
/// assert!(filter.check(b"alpha"));
/// assert!(filter.check(b"beta"));
/// # Ok::<(), saltbloom::FilterError>(())
/// ```
///
/// Shared across threads:
///
/// ```
/// use std::sync::Arc;
/// use saltbloom::SaltedBloomFilter;
///
/// let filter = Arc::new(SaltedBloomFilter::new(8_000, 5)?);
/// let writer = Arc::clone(&filter);
/// std::thread::spawn(move || writer.put(b"from-thread"))
///     .join()
///     .unwrap();
/// assert!(filter.check(b"from-thread"));
/// # Ok::<(), saltbloom::FilterError>(())
/// ```
pub struct SaltedBloomFilter<H: PositionHasher = Crc64Hasher> {
    /// Bit array; write-exclusive for `put`, read-shared for `check`.
    bits: RwLock<BitVec>,

    /// One salt per hash function, distinct, fixed for the filter lifetime.
    salts: Box<[[u8; SALT_LEN]]>,

    /// Position strategy applied to every `(salt, item)` pair.
    hasher: H,

    /// Total bit capacity, cached outside the lock.
    bit_count: usize,
}

impl SaltedBloomFilter<Crc64Hasher> {
    /// Create a filter with `bit_count` bits and `hash_count` salted hash
    /// functions, using the default CRC-64 position strategy.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfiguration`] if `bit_count` or
    /// `hash_count` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::SaltedBloomFilter;
    ///
    /// let filter = SaltedBloomFilter::new(800, 5)?;
    /// assert_eq!(filter.bit_count(), 800);
    /// assert_eq!(filter.hash_count(), 5);
    /// # Ok::<(), saltbloom::FilterError>(())
    /// ```
    pub fn new(bit_count: usize, hash_count: usize) -> Result<Self> {
        Self::with_hasher(bit_count, hash_count, Crc64Hasher::new())
    }
}

impl<H: PositionHasher> SaltedBloomFilter<H> {
    /// Create a filter with an explicit position strategy.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfiguration`] if `bit_count` or
    /// `hash_count` is 0.
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
    pub fn with_hasher(bit_count: usize, hash_count: usize, hasher: H) -> Result<Self> {
        if hash_count == 0 {
            return Err(FilterError::invalid_configuration(
                "hash count must be greater than 0",
            ));
        }
        let bits = BitVec::new(bit_count)?;

        Ok(Self {
            bits: RwLock::new(bits),
            salts: generate_salts(hash_count),
            hasher,
            bit_count,
        })
    }

    /// Record an item in the filter.
    ///
    /// Computes one position per salt and sets each bit under a single
    /// write guard, so a concurrent `check` sees either none or all of the
    /// item's bits. Idempotent; cannot fail for any byte slice, including
    /// empty.
    pub fn put(&self, item: &[u8]) {
        let mut bits = self.bits.write();
        for salt in self.salts.iter() {
            bits.set(self.hasher.position(salt, item, self.bit_count));
        }
    }

    /// Test whether an item may have been recorded.
    ///
    /// Takes the read guard and probes one bit per salt, returning `false`
    /// on the first clear bit. `false` is definitive; `true` may be a
    /// false positive.
    #[must_use]
    pub fn check(&self, item: &[u8]) -> bool {
        let bits = self.bits.read();
        for salt in self.salts.iter() {
            if !bits.get(self.hasher.position(salt, item, self.bit_count)) {
                return false;
            }
        }
        true
    }

    /// Get the total number of bits.
    #[must_use]
    #[inline]
    pub const fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Get the number of salted hash functions.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.salts.len()
    }

    /// Count the bits currently set.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bits.read().count_ones()
    }

    /// Check whether no bits are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }

    /// Get the fraction of bits set, in [0.0, 1.0].
    ///
    /// A load factor approaching 0.5 means the filter is near its design
    /// capacity; beyond that the false positive rate degrades quickly.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.count_ones() as f64 / self.bit_count as f64
    }

    /// Render the bit array as a diagnostic bitmap.
    ///
    /// One row per 64 bits, `▨` for set and `□` for clear, rows separated
    /// by newlines. The rendering reflects the state at the moment the read
    /// guard is held; it carries no contract beyond that.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::SaltedBloomFilter;
    ///
    /// let filter = SaltedBloomFilter::new(128, 3)?;
    /// filter.put(b"alpha");
    /// println!("{}", filter.bitmap());
    /// # Ok::<(), saltbloom::FilterError>(())
    /// ```
    #[must_use]
    pub fn bitmap(&self) -> String {
        let bits = self.bits.read();
        let mut out = String::with_capacity(self.bit_count * 3 + self.bit_count / BITMAP_ROW_BITS);
        for index in 0..self.bit_count {
            if index > 0 && index % BITMAP_ROW_BITS == 0 {
                out.push('\n');
            }
            out.push(if bits.get(index) { CELL_SET } else { CELL_CLEAR });
        }
        out
    }

    /// Emit the bitmap and set-bit count at DEBUG level.
    ///
    /// Count and rendering come from one snapshot of the bit array, so the
    /// logged numbers always agree even under concurrent writers. No-op
    /// unless a `log` backend is installed and DEBUG is enabled.
    pub fn log_bitmap(&self) {
        if log::log_enabled!(log::Level::Debug) {
            let rendering = self.bitmap();
            let ones = rendering.chars().filter(|&c| c == CELL_SET).count();
            log::debug!(
                "filter state: {}/{} bits set\n{}",
                ones,
                self.bit_count,
                rendering
            );
        }
    }
}

impl<H: PositionHasher> MembershipFilter for SaltedBloomFilter<H> {
    fn put(&self, item: &[u8]) {
        SaltedBloomFilter::put(self, item)
    }

    fn check(&self, item: &[u8]) -> bool {
        SaltedBloomFilter::check(self, item)
    }

    fn bit_count(&self) -> usize {
        self.bit_count
    }

    fn hash_count(&self) -> usize {
        self.salts.len()
    }

    fn count_ones(&self) -> usize {
        SaltedBloomFilter::count_ones(self)
    }
}

impl<H: PositionHasher> std::fmt::Debug for SaltedBloomFilter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedBloomFilter")
            .field("bit_count", &self.bit_count)
            .field("hash_count", &self.salts.len())
            .field("count_ones", &self.count_ones())
            .finish()
    }
}

impl<H: PositionHasher> std::fmt::Display for SaltedBloomFilter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.bitmap())
    }
}
