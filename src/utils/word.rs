//  See `BitWord` trait.
//
//  #   Why a trait rather than two concrete types?
//
//  The two dense implementations run the exact same algorithm over granules of different widths. A trait carrying the
//  width as compile-time constants lets the dense core be written once, with every shift amount and mask folded at
//  compile time, rather than duplicated per width or computed per operation.
//
//  #   Why `usize` as the word type?
//
//  The word-backed set trades portability for speed, and the fastest granule is the machine's own: 32 bits on 32-bits
//  platforms, 64 bits on 64-bits platforms. `usize` tracks the pointer width and is therefore exactly that granule.
//
//  #   Why shifts and masks rather than `/` and `%`?
//
//  `BITS` is a power of two by construction, so `index >> SHIFT` and `index & MASK` compute the same quotient and
//  remainder. The optimizer generally fuses the division pair anyway, but the shift/mask form also documents the
//  power-of-two invariant at every use site.

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOrAssign, Not, Shl},
};

/// A fixed-width storage granule of a bit-packed set.
///
/// A set of bit indexes is packed into a sequence of words, each holding `BITS` bits. A bit index is split into the
/// index _of_ its word in the sequence, and the index of the bit _in_ that word.
///
/// The trait is implemented for `usize` -- the machine word, backing the word set and the sparse set -- and for `u8`,
/// backing the byte set.
pub trait BitWord:
    Copy
    + Eq
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Number of bits in a word. A power of two.
    const BITS: usize;

    /// Number of positions a bit index is right-shifted by to obtain the index of its word. Equal to `log2(BITS)`.
    const SHIFT: u32;

    /// Mask applied to a bit index to obtain the index of the bit in its word. Equal to `BITS - 1`.
    const MASK: usize;

    /// An all-zeros word.
    const ALL_ZEROS: Self;

    /// A word with only its lowest bit set.
    const ONE: Self;

    /// Splits a bit index into an index-of-word/index-in-word pair.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::BitWord;
    /// let (of_word, in_word) = <u8 as BitWord>::split(13);
    ///
    /// assert_eq!(1, of_word);
    /// assert_eq!(5, in_word);
    /// ```
    #[inline]
    fn split(index: usize) -> (usize, u32) {
        (index >> Self::SHIFT, (index & Self::MASK) as u32)
    }

    /// Returns the number of words required to address `num_bits` bits, rounding up to a whole word.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::BitWord;
    /// assert_eq!(0, <u8 as BitWord>::words_for(0));
    /// assert_eq!(1, <u8 as BitWord>::words_for(8));
    /// assert_eq!(2, <u8 as BitWord>::words_for(9));
    /// ```
    #[inline]
    fn words_for(num_bits: usize) -> usize {
        num_bits.div_ceil(Self::BITS)
    }

    /// Returns a word with only the bit at `bit` set.
    ///
    /// #   Panics
    ///
    /// In Debug, panics if `bit` is greater than or equal to `BITS`.
    ///
    /// In Release, any high bit of `bit` is ignored (masked away).
    #[inline]
    fn bit_mask(bit: u32) -> Self {
        debug_assert!((bit as usize) < Self::BITS);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit % Self::BITS as u32;

        Self::ONE << shift
    }

    /// Returns whether the bit at `bit` is set.
    ///
    /// #   Panics
    ///
    /// See `bit_mask`.
    #[inline]
    fn is_set(self, bit: u32) -> bool {
        (self & Self::bit_mask(bit)) != Self::ALL_ZEROS
    }

    /// Sets the bit at `bit`.
    ///
    /// #   Panics
    ///
    /// See `bit_mask`.
    #[inline]
    fn set(&mut self, bit: u32) {
        *self |= Self::bit_mask(bit);
    }

    /// Unsets the bit at `bit`.
    ///
    /// #   Panics
    ///
    /// See `bit_mask`.
    #[inline]
    fn unset(&mut self, bit: u32) {
        *self &= !Self::bit_mask(bit);
    }

    /// Returns whether no bit of the word is set.
    #[inline]
    fn is_all_zeros(self) -> bool {
        self == Self::ALL_ZEROS
    }
}

/// The machine word: 32 bits wide on 32-bits platforms, 64 bits wide on 64-bits platforms.
impl BitWord for usize {
    const BITS: usize = usize::BITS as usize;

    const SHIFT: u32 = usize::BITS.trailing_zeros();

    const MASK: usize = <Self as BitWord>::BITS - 1;

    const ALL_ZEROS: Self = 0;

    const ONE: Self = 1;
}

/// The byte: always 8 bits wide, regardless of platform.
impl BitWord for u8 {
    const BITS: usize = 8;

    const SHIFT: u32 = 3;

    const MASK: usize = 7;

    const ALL_ZEROS: Self = 0;

    const ONE: Self = 1;
}

// mod split_tests

#[cfg(test)]
mod bit_tests {
    use super::*;

    #[test]
    fn is_set_empty() {
        for i in 0..8 {
            assert!(!u8::ALL_ZEROS.is_set(i), "{i}");
        }

        for i in 0..usize::BITS {
            assert!(!<usize as BitWord>::ALL_ZEROS.is_set(i), "{i}");
        }
    }

    #[test]
    fn is_set_full() {
        for i in 0..8 {
            assert!(0xFFu8.is_set(i), "{i}");
        }

        for i in 0..usize::BITS {
            assert!(usize::MAX.is_set(i), "{i}");
        }
    }

    #[test]
    fn set_empty() {
        for i in 0..8 {
            let mut word = u8::ALL_ZEROS;

            BitWord::set(&mut word, i);

            assert_eq!(1u8 << i, word, "{i}");
        }
    }

    #[test]
    fn set_is_idempotent() {
        for i in 0..8 {
            let mut word = 0xFFu8;

            BitWord::set(&mut word, i);

            assert_eq!(0xFF, word, "{i}");
        }
    }

    #[test]
    fn unset_full() {
        for i in 0..8 {
            let mut word = 0xFFu8;

            BitWord::unset(&mut word, i);

            assert_eq!(0xFF ^ (1u8 << i), word, "{i}");
        }
    }

    #[test]
    fn unset_is_idempotent() {
        for i in 0..8 {
            let mut word = u8::ALL_ZEROS;

            BitWord::unset(&mut word, i);

            assert_eq!(0, word, "{i}");
        }
    }

    #[test]
    fn is_all_zeros_brush() {
        assert!(<u8 as BitWord>::ALL_ZEROS.is_all_zeros());
        assert!(!0b0001_0000u8.is_all_zeros());

        assert!(<usize as BitWord>::ALL_ZEROS.is_all_zeros());
        assert!(!1usize.is_all_zeros());
    }
} // mod bit_tests
