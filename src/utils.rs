//! Utilities for implementers of bit-packed sets.

mod word;

pub use word::BitWord;
