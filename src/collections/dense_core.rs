//! Core implementation of a dense bit-packed set, generic over its word width.

use crate::utils::BitWord;

/// Core implementation of a dense bit-packed set.
///
/// The backing storage spans every word from index 0 up to the highest addressable index, regardless of how many bits
/// are actually set. [`WordSet`](crate::collections::WordSet) and [`ByteSet`](crate::collections::ByteSet) are thin
/// wrappers over this core, pinning the word width to the machine word and the byte respectively.
///
/// The capacity is fixed at creation: none of the operations ever resizes the storage. Growth is explicit, through
/// `grow`.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize), serde(transparent))]
pub struct DenseCore<W> {
    words: Vec<W>,
}

//
//  Creation
//

impl<W> DenseCore<W>
where
    W: BitWord,
{
    /// Creates a set capable of addressing at least `num_bits` bits, rounded up to a whole word, with every bit unset.
    pub fn with_capacity(num_bits: usize) -> Self {
        let words = vec![W::ALL_ZEROS; W::words_for(num_bits)];

        Self { words }
    }

    /// Creates a set over an existing sequence of words.
    pub fn from_words(words: Vec<W>) -> Self {
        Self { words }
    }
}

//
//  BitSet
//

impl<W> DenseCore<W>
where
    W: BitWord,
{
    /// Returns the number of addressable bits. Always a multiple of the word width.
    pub fn capacity(&self) -> usize {
        self.words.len() * W::BITS
    }

    /// Returns the underlying words.
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Returns the underlying words, consuming the set.
    pub fn into_words(self) -> Vec<W> {
        self.words
    }

    /// Returns whether the bit at `index` is set, or not.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let (of_word, in_word) = W::split(index);

        self.words[of_word].is_set(in_word)
    }

    /// Sets the bit at `index`.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn set(&mut self, index: usize) {
        let (of_word, in_word) = W::split(index);

        self.words[of_word].set(in_word);
    }

    /// Unsets the bit at `index`.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        let (of_word, in_word) = W::split(index);

        self.words[of_word].unset(in_word);
    }

    /// Sets the bit at `index` if `value` is true, otherwise unsets it.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a word beyond the allocated storage.
    #[inline]
    pub fn set_bool(&mut self, index: usize, value: bool) {
        if value {
            self.set(index);
        } else {
            self.unset(index);
        }
    }

    /// Ensures the set can address at least `num_bits` bits.
    ///
    /// If the current capacity is already sufficient, this is a no-op. Otherwise, exactly the missing zeroed words are
    /// appended: existing word values, and thereby the bits they hold, are preserved unchanged. Growing never
    /// truncates.
    pub fn grow(&mut self, num_bits: usize) {
        let target = W::words_for(num_bits);

        if target > self.words.len() {
            self.words.resize(target, W::ALL_ZEROS);
        }
    }
}

// mod capacity_tests

#[cfg(test)]
mod operation_tests {
    use super::*;

    #[test]
    fn set_across_word_boundary() {
        let mut core = DenseCore::<u8>::with_capacity(16);

        core.set(7);
        core.set(8);

        assert_eq!(&[0b1000_0000, 0b0000_0001], core.words());

        assert!(core.get(7));
        assert!(core.get(8));
        assert!(!core.get(6));
        assert!(!core.get(9));
    }

    #[test]
    fn unset_leaves_siblings() {
        let mut core = DenseCore::<u8>::from_words(vec![0b1111_1111]);

        core.unset(3);

        assert_eq!(&[0b1111_0111], core.words());
    }

    #[test]
    fn set_bool_dispatches() {
        let mut core = DenseCore::<usize>::with_capacity(usize::BITS as usize);

        core.set_bool(5, true);

        assert!(core.get(5));

        core.set_bool(5, false);

        assert!(!core.get(5));
    }

    #[test]
    #[should_panic]
    fn get_out_of_range() {
        let core = DenseCore::<u8>::with_capacity(8);

        core.get(8);
    }

    #[test]
    #[should_panic]
    fn set_out_of_range() {
        let mut core = DenseCore::<u8>::with_capacity(8);

        core.set(8);
    }

    #[test]
    #[should_panic]
    fn unset_out_of_range() {
        let mut core = DenseCore::<u8>::with_capacity(8);

        core.unset(8);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_empty() {
        let core = DenseCore::<usize>::with_capacity(0);

        core.get(0);
    }
} // mod operation_tests

// mod grow_tests
