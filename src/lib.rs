//! # saltbloom
//!
//! A salted multi-hash Bloom filter for concurrent membership testing.
//!
//! A Bloom filter answers "have I seen this item?" in constant space with
//! no false negatives and a tunable false positive rate. Instead of `k`
//! distinct hash algorithms, this crate derives its hash family from `k`
//! random salts drawn per instance from the operating system's entropy
//! source: one algorithm, run over each `(salt, item)` pair, yields `k`
//! independent bit positions.
//!
//! ## Quick Start
//!
//! ```
//! use saltbloom::SaltedBloomFilter;
//!
//! // 800 bits, 5 salted hash functions.
//! let filter = SaltedBloomFilter::new(800, 5)?;
//!
//! filter.put(b"alpha");
//! filter.put(b"beta");
//!
//! assert!(filter.check(b"alpha"));   // definitely inserted
//! assert!(filter.check(b"beta"));
//! // Absent items come back false (barring a false positive).
//! # Ok::<(), saltbloom::FilterError>(())
//! ```
//!
//! ## Sizing
//!
//! Use the advisory estimator to pick a hash count for a bit budget:
//!
//! ```
//! use saltbloom::estimate;
//!
//! // 10 bits per expected item.
//! let est = estimate(8_000, 800)?;
//! println!("{}", est.report());
//! // optimal hash functions: 6.93, false positive probability: 0.8192%
//! # Ok::<(), saltbloom::FilterError>(())
//! ```
//!
//! ## Hash Strategies
//!
//! The position algorithm is pluggable via [`hash::PositionHasher`]:
//!
//! | Strategy | Algorithm | Notes |
//! |----------|-----------|-------|
//! | [`hash::Crc64Hasher`] | CRC-64/ECMA-182 | Fast checksum, the default |
//! | [`hash::Sha256Hasher`] | SHA-256 | Cryptographic digest |
//! | `hash::XxHasher` | XXH3-64 | Fastest, feature `xxhash` |
//!
//! ```
//! use saltbloom::{SaltedBloomFilter, hash::Sha256Hasher};
//!
//! let filter = SaltedBloomFilter::with_hasher(800, 5, Sha256Hasher::new())?;
//! filter.put(b"alpha");
//! assert!(filter.check(b"alpha"));
//! # Ok::<(), saltbloom::FilterError>(())
//! ```
//!
//! ## Concurrency
//!
//! A filter is a passive shared object. The bit array sits behind a
//! reader/writer lock: `check` calls run in parallel, `put` is exclusive
//! for the duration of its k-bit update. Share one instance across threads
//! with `Arc`; no external locking is needed.
//!
//! ## What This Crate Does Not Do
//!
//! * No removal: bits are never cleared (use a counting filter elsewhere
//!   if you need deletion).
//! * No persistence or serialization.
//! * No resizing: capacity is fixed at construction.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod filters;
pub mod hash;

pub use crate::core::filter::MembershipFilter;
pub use crate::core::params::{estimate, Estimate};
pub use crate::error::{FilterError, Result};
pub use crate::filters::SaltedBloomFilter;

/// Commonly used items, importable in one line.
///
/// ```
/// use saltbloom::prelude::*;
///
/// let filter = SaltedBloomFilter::new(800, 5)?;
/// filter.put(b"alpha");
/// # Ok::<(), FilterError>(())
/// ```
pub mod prelude {
    pub use crate::core::filter::MembershipFilter;
    pub use crate::core::params::{estimate, Estimate};
    pub use crate::error::{FilterError, Result};
    pub use crate::filters::SaltedBloomFilter;
    pub use crate::hash::{Crc64Hasher, PositionHasher, Sha256Hasher};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_crate_level_api() {
        let filter = SaltedBloomFilter::new(800, 5).unwrap();
        filter.put(b"smoke");
        assert!(filter.check(b"smoke"));

        let est = estimate(800, 80).unwrap();
        assert!(est.hash_count > 0.0);
    }

    #[test]
    fn test_generic_over_strategy() {
        fn exercise<H: PositionHasher>(filter: &SaltedBloomFilter<H>) {
            filter.put(b"generic");
            assert!(filter.check(b"generic"));
        }

        exercise(&SaltedBloomFilter::new(800, 5).unwrap());
        exercise(&SaltedBloomFilter::with_hasher(800, 5, Sha256Hasher::new()).unwrap());
    }
}
