//! A dense bit-packed set backed by machine words.

use crate::{
    api::{BitGrow, BitSet},
    collections::DenseCore,
};

/// A dense bit-packed set backed by machine words.
///
/// The fastest implementation, and the densest per bit: each operation moves a full machine word -- 32 bits on 32-bits
/// platforms, 64 bits on 64-bits platforms. The flip side is that the backing layout varies with the platform word
/// width, so a `WordSet` must never be persisted nor transmitted; use [`ByteSet`](crate::collections::ByteSet) for
/// that.
///
/// The capacity is fixed at creation, and indexing past it panics. Growth is explicit, through `grow`.
///
/// #   Examples
///
/// ```
/// #   use bit_packed::collections::WordSet;
/// let mut set = WordSet::with_capacity(64);
///
/// set.set(42);
///
/// assert!(set.get(42));
/// assert!(!set.get(43));
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WordSet(DenseCore<usize>);

//
//  Creation
//

impl WordSet {
    /// Creates a set capable of addressing at least `num_bits` bits, rounded up to a whole word, with every bit unset.
    pub fn with_capacity(num_bits: usize) -> Self {
        Self(DenseCore::with_capacity(num_bits))
    }

    /// Creates a set over an existing sequence of words.
    pub fn from_words(words: Vec<usize>) -> Self {
        Self(DenseCore::from_words(words))
    }
}

//
//  BitSet (inherent)
//

impl WordSet {
    /// Returns the number of addressable bits. Always a multiple of the machine word width.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Returns the underlying words.
    pub fn as_words(&self) -> &[usize] {
        self.0.words()
    }

    /// Returns whether the bit at `index` is set, or not.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.0.get(index)
    }

    /// Sets the bit at `index`.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.0.set(index);
    }

    /// Unsets the bit at `index`.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        self.0.unset(index);
    }

    /// Sets the bit at `index` if `value` is true, otherwise unsets it.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn set_bool(&mut self, index: usize, value: bool) {
        self.0.set_bool(index, value);
    }

    /// Ensures the set can address at least `num_bits` bits, appending zeroed words if necessary.
    ///
    /// See [`BitGrow::grow`] for the full contract.
    pub fn grow(&mut self, num_bits: usize) {
        self.0.grow(num_bits);
    }
}

//
//  BitSet (trait)
//

impl BitSet for WordSet {
    fn get(&self, index: usize) -> bool {
        self.0.get(index)
    }

    fn set(&mut self, index: usize) {
        self.0.set(index);
    }

    fn unset(&mut self, index: usize) {
        self.0.unset(index);
    }

    fn set_bool(&mut self, index: usize, value: bool) {
        self.0.set_bool(index, value);
    }
}

impl BitGrow for WordSet {
    fn grow(&mut self, num_bits: usize) {
        self.0.grow(num_bits);
    }
}

#[cfg(test)]
mod word_set_tests {
    use super::*;

    #[test]
    fn machine_word_granule() {
        let set = WordSet::with_capacity(1);

        assert_eq!(usize::BITS as usize, set.capacity());
        assert_eq!(1, set.as_words().len());
    }

    #[test]
    fn words_reflect_bits() {
        let mut set = WordSet::with_capacity(usize::BITS as usize);

        set.set(0);
        set.set(3);

        assert_eq!(&[0b1001], set.as_words());

        set.unset(0);

        assert_eq!(&[0b1000], set.as_words());
    }

    #[test]
    fn from_words_round_trip() {
        let set = WordSet::from_words(vec![0b1001]);

        assert!(set.get(0));
        assert!(set.get(3));
        assert!(!set.get(1));
    }

    #[test]
    fn grow_extends_capacity() {
        let mut set = WordSet::with_capacity(0);

        set.grow(usize::BITS as usize + 1);

        assert_eq!(2 * usize::BITS as usize, set.capacity());
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let set = WordSet::with_capacity(usize::BITS as usize);

        set.get(usize::BITS as usize);
    }
} // mod word_set_tests
