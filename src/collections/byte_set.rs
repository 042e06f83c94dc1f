//! A dense bit-packed set backed by bytes.

use crate::{
    api::{BitGrow, BitSet},
    collections::DenseCore,
};

/// A dense bit-packed set backed by bytes.
///
/// The granule is pinned to 8 bits regardless of platform, making this the one implementation whose backing layout is
/// portable: byte `k` holds bits `8k` to `8k + 7`, least-significant bit first, on every machine. The backing bytes,
/// exposed through `as_bytes` and `into_bytes`, are the exact serialization surface; any round-trip must carry them
/// unchanged. Each operation moves fewer bits than with [`WordSet`](crate::collections::WordSet), which makes it
/// slightly slower.
///
/// The capacity is fixed at creation, and indexing past it panics. Growth is explicit, through `grow`.
///
/// #   Examples
///
/// ```
/// #   use bit_packed::collections::ByteSet;
/// let mut set = ByteSet::with_capacity(8);
///
/// set.set(0);
/// set.set(7);
///
/// assert_eq!(&[0b1000_0001], set.as_bytes());
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize), serde(transparent))]
pub struct ByteSet(DenseCore<u8>);

//
//  Creation
//

impl ByteSet {
    /// Creates a set capable of addressing at least `num_bits` bits, rounded up to a whole byte, with every bit unset.
    pub fn with_capacity(num_bits: usize) -> Self {
        Self(DenseCore::with_capacity(num_bits))
    }

    /// Creates a set over an existing sequence of bytes, as previously obtained from `as_bytes` or `into_bytes`.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(DenseCore::from_words(bytes))
    }
}

//
//  BitSet (inherent)
//

impl ByteSet {
    /// Returns the number of addressable bits. Always a multiple of 8.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Returns the underlying bytes, the caller-visible serialization surface.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.words()
    }

    /// Returns the underlying bytes, consuming the set.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_words()
    }

    /// Returns whether the bit at `index` is set, or not.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a byte beyond the allocated storage.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.0.get(index)
    }

    /// Sets the bit at `index`.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a byte beyond the allocated storage.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.0.set(index);
    }

    /// Unsets the bit at `index`.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a byte beyond the allocated storage.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        self.0.unset(index);
    }

    /// Sets the bit at `index` if `value` is true, otherwise unsets it.
    ///
    /// #   Panics
    ///
    /// Panics if `index` addresses a byte beyond the allocated storage.
    #[inline]
    pub fn set_bool(&mut self, index: usize, value: bool) {
        self.0.set_bool(index, value);
    }

    /// Ensures the set can address at least `num_bits` bits, appending zeroed bytes if necessary.
    ///
    /// See [`BitGrow::grow`] for the full contract.
    pub fn grow(&mut self, num_bits: usize) {
        self.0.grow(num_bits);
    }
}

//
//  BitSet (trait)
//

impl BitSet for ByteSet {
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

impl BitGrow for ByteSet {
    fn grow(&mut self, num_bits: usize) {
        self.0.grow(num_bits);
    }
}

#[cfg(test)]
mod byte_layout_tests {
    use super::*;

    #[test]
    fn byte_granule_regardless_of_platform() {
        let set = ByteSet::with_capacity(1);

        assert_eq!(8, set.capacity());
        assert_eq!(1, set.as_bytes().len());
    }

    #[test]
    fn lowest_and_highest_bit_of_a_byte() {
        let mut set = ByteSet::with_capacity(8);

        set.set(0);
        set.set(7);

        assert_eq!(&[0b1000_0001], set.as_bytes());
    }

    #[test]
    fn least_significant_bit_first() {
        let mut set = ByteSet::with_capacity(16);

        set.set(1);
        set.set(8);

        assert_eq!(&[0b0000_0010, 0b0000_0001], set.as_bytes());
    }

    #[test]
    fn bytes_round_trip() {
        let mut set = ByteSet::with_capacity(16);

        set.set(3);
        set.set(9);

        let copy = ByteSet::from_bytes(set.as_bytes().to_vec());

        assert_eq!(set, copy);
        assert_eq!(set.into_bytes(), copy.into_bytes());
    }
} // mod byte_layout_tests

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialize_as_bytes() {
        let mut set = ByteSet::with_capacity(8);

        set.set(0);
        set.set(7);

        let serialized = serde_json::to_string(&set).expect("success");

        assert_eq!("[129]", serialized);
    }

    #[test]
    fn round_trip() {
        let mut set = ByteSet::with_capacity(24);

        set.set(0);
        set.set(13);
        set.set(23);

        let serialized = serde_json::to_string(&set).expect("success");

        let deserialized: ByteSet = serde_json::from_str(&serialized).expect("success");

        assert_eq!(set, deserialized);
    }
} // mod serde_tests
