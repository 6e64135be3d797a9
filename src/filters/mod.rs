//! Filter implementations.

pub mod salted;

pub use salted::SaltedBloomFilter;
