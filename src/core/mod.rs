//! Core building blocks: the bit array, the filter trait, and sizing math.

pub mod bitvec;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use filter::MembershipFilter;
pub use params::{estimate, Estimate};
