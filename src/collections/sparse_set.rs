//! A bit-packed set holding only the words which contain set bits.

use std::collections::hash_map::Entry;

use ahash::AHashMap;

use crate::{api::BitSet, utils::BitWord};

/// A bit-packed set holding only the words which contain set bits.
///
/// Where the dense implementations allocate every word from 0 up to the highest addressable index, a `SparseSet` maps
/// word indexes to machine-word values and holds an entry if and only if its word is nonzero: unsetting the last bit
/// of a word removes the entry on the spot. Memory is therefore proportional to the number of distinct set words, not
/// to the highest index ever touched.
///
/// Every index is valid at all times -- an absent word simply means every one of its bits is unset -- so there is no
/// capacity to declare, no growth operation, and no out-of-range panic.
///
/// Each operation pays for a hash map lookup, making it markedly slower than the dense implementations; reserve it for
/// sparse workloads where memory is the top concern, and benchmark against the dense sets with realistic data first.
/// As the map is unordered, a `SparseSet` has no canonical byte layout, and no serialization support.
///
/// #   Examples
///
/// ```
/// #   use bit_packed::collections::SparseSet;
/// let mut set = SparseSet::new();
///
/// set.set(1_000_000_007);
///
/// assert!(set.get(1_000_000_007));
/// assert_eq!(1, set.word_count());
///
/// set.unset(1_000_000_007);
///
/// assert_eq!(0, set.word_count());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SparseSet {
    //  Invariant: an entry is present if and only if its word is nonzero.
    words: AHashMap<usize, usize>,
}

//
//  Creation
//

impl SparseSet {
    /// Creates a new, empty, set.
    pub fn new() -> Self {
        Self {
            words: AHashMap::new(),
        }
    }
}

//
//  BitSet (inherent)
//

impl SparseSet {
    /// Returns the number of words with at least one set bit.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns whether no bit of the set is set.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns whether the bit at `index` is set, or not.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let (of_word, in_word) = usize::split(index);

        self.words.get(&of_word).is_some_and(|word| word.is_set(in_word))
    }

    /// Sets the bit at `index`.
    ///
    /// This is the only operation which may insert a map entry: a word insert is performed if no bit of the word was
    /// previously set.
    #[inline]
    pub fn set(&mut self, index: usize) {
        let (of_word, in_word) = usize::split(index);

        self.words.entry(of_word).or_default().set(in_word);
    }

    /// Unsets the bit at `index`.
    ///
    /// A no-op if no bit of the word is set. If the unset bit was the last set bit of its word, the word's entry is
    /// removed, reclaiming its storage.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        let (of_word, in_word) = usize::split(index);

        let Entry::Occupied(mut entry) = self.words.entry(of_word) else {
            return;
        };

        entry.get_mut().unset(in_word);

        if entry.get().is_all_zeros() {
            entry.remove();
        }
    }

    /// Sets the bit at `index` if `value` is true, otherwise unsets it.
    ///
    /// See `set` and `unset` for the storage that either branch allocates or reclaims.
    #[inline]
    pub fn set_bool(&mut self, index: usize, value: bool) {
        if value {
            self.set(index);
        } else {
            self.unset(index);
        }
    }
}

//
//  BitSet (trait)
//

impl BitSet for SparseSet {
    fn get(&self, index: usize) -> bool {
        self.get(index)
    }

    fn set(&mut self, index: usize) {
        self.set(index);
    }

    fn unset(&mut self, index: usize) {
        self.unset(index);
    }

    fn set_bool(&mut self, index: usize, value: bool) {
        self.set_bool(index, value);
    }
}

// mod sparse_tests
