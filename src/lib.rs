//! Bit-packed integer sets
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains the vocabulary traits shared by all implementations.
//! -   The `collections` module contains the three implementations of bit-packed sets.
//! -   The `utils` module contains the low-level word arithmetic upon which the implementations are built.
//!
//!
//! #   Choosing an implementation
//!
//! All three implementations expose the same four operations -- get, set, unset, and set-bool -- over a set of
//! non-negative integer bit indexes. They differ only in how the bits are stored:
//!
//! -   [`collections::WordSet`] packs bits into machine-sized words. It is the fastest and densest choice when the
//!     highest index is known up front, at the cost of a backing layout that varies with the platform word width.
//! -   [`collections::ByteSet`] packs bits into bytes. Slightly slower, as each operation moves fewer bits, but its
//!     backing bytes mean the same thing on every platform, making it the one implementation safe to persist or
//!     transmit.
//! -   [`collections::SparseSet`] maps word indexes to words, allocating only for words with at least one set bit. Each
//!     operation pays for a hash map lookup, in exchange for memory proportional to the number of distinct set words
//!     rather than the highest index ever touched.
//!
//! The dense implementations never grow on their own: indexing past their allocated storage is a programming error,
//! and panics. Explicit growth is available through [`api::BitGrow`].
//!
//!
//! #   Index type
//!
//! Bits are indexed by a `usize`.
//!
//! #### Why not `u64`?
//!
//! The dense implementations store their words in a `Vec`, and in Rust all slices are indexed by a `usize`: a dense
//! set can never address more bits than a `usize` spans. The sparse implementation is keyed by _word_ index, which a
//! `usize` covers with room to spare.
//!
//! #### Why not a generic index type?
//!
//! A generic index buys nothing here but clutter: every type and trait of the crate would grow a parameter, and a
//! dedicated conversion trait with it, for three implementations which all end up indexing a `Vec` or a map anyway.

//  Lints
#![deny(missing_docs)]
//  Test modules are kept next to the code they exercise.
#![allow(clippy::items_after_test_module)]

pub mod api;
pub mod collections;
pub mod utils;
