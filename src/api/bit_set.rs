//! A generic bit-packed set.

/// A set of non-negative integer bit indexes.
///
/// This trait is the only surface other code may depend on polymorphically across all implementations of this crate.
/// Growth is deliberately kept out of it: only the dense implementations need growing, and they expose it through the
/// narrower [`BitGrow`](crate::api::BitGrow) trait.
///
/// #   Panics
///
/// Implementations backed by fixed-capacity storage panic when `index` addresses a word beyond their allocated
/// storage, for every operation. They never silently report an out-of-range bit as unset.
pub trait BitSet {
    /// Returns whether the bit at `index` is set, or not.
    fn get(&self, index: usize) -> bool;

    /// Sets the bit at `index`.
    fn set(&mut self, index: usize);

    /// Unsets the bit at `index`.
    fn unset(&mut self, index: usize);

    /// Sets the bit at `index` if `value` is true, otherwise unsets it.
    fn set_bool(&mut self, index: usize, value: bool) {
        if value {
            self.set(index);
        } else {
            self.unset(index);
        }
    }
}
