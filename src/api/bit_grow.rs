//! Explicit growth of a fixed-capacity bit-packed set.

use crate::api::BitSet;

/// Explicit growth of a fixed-capacity bit set.
///
/// The dense implementations of this crate never grow on their own; when the highest index is not known up front, this
/// trait is their opt-in escape hatch. The sparse implementation grows and shrinks automatically, and therefore does
/// not implement it.
pub trait BitGrow: BitSet {
    /// Ensures the set can address at least `num_bits` bits.
    ///
    /// If the current capacity, rounded up to whole words, is already sufficient, this is a no-op. Otherwise exactly
    /// the missing zeroed words are appended: every previously addressable bit keeps its value, and every newly
    /// addressable bit reads as unset. Growing never truncates nor reorders existing words.
    ///
    /// Growth may reallocate the backing storage; references to it obtained before the call must not be retained
    /// across it.
    fn grow(&mut self, num_bits: usize);
}
