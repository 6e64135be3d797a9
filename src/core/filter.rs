//! Core membership filter trait.

/// Concurrent approximate membership filter.
///
/// All methods take `&self`; implementations provide interior
/// synchronization so a filter can be shared across threads behind an `Arc`
/// without external locking.
///
/// # Guarantees
///
/// * No false negatives: after `put(item)` returns, `check(item)` returns
///   `true` on the same instance.
/// * False positives are possible; their rate depends on sizing (see
///   [`crate::core::params::estimate`]).
///
/// # Examples
///
/// ```
/// use saltbloom::{MembershipFilter, SaltedBloomFilter};
///
/// let filter = SaltedBloomFilter::new(800, 5)?;
/// filter.put(b"alpha");
/// assert!(filter.check(b"alpha"));
/// # Ok::<(), saltbloom::FilterError>(())
/// ```
pub trait MembershipFilter: Send + Sync {
    /// Record an item in the filter.
    ///
    /// Idempotent: inserting the same item again sets the same bits.
    /// Cannot fail; any byte sequence, including empty, is a valid item.
    fn put(&self, item: &[u8]);

    /// Test whether an item may have been recorded.
    ///
    /// `false` is definitive; `true` may be a false positive.
    fn check(&self, item: &[u8]) -> bool;

    /// Get the total number of bits in the filter.
    fn bit_count(&self) -> usize;

    /// Get the number of hash functions applied per item.
    fn hash_count(&self) -> usize;

    /// Count the bits currently set.
    fn count_ones(&self) -> usize;

    /// Check whether no bits are set.
    fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }
}
