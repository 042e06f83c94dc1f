//! A set of high-level traits to abstract over the implementation details.

pub mod bit_grow;
pub mod bit_set;

pub use bit_grow::BitGrow;
pub use bit_set::BitSet;
