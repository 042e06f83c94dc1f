//! Implementations of bit-packed sets.

//  Design considerations
//
//  #   Why inherent?
//
//  The methods are doubly implemented (as inherent methods, and as `BitSet`/`BitGrow` methods) so they can be called
//  without importing the traits.
//
//  #   Why a shared core?
//
//  The word-backed and byte-backed sets run the same algorithm over different granules; `DenseCore` holds that
//  algorithm once, generic over the granule, and the two public types are thin wrappers pinning the width.

pub mod byte_set;
pub mod dense_core;
pub mod sparse_set;
pub mod word_set;

pub use byte_set::ByteSet;
pub use dense_core::DenseCore;
pub use sparse_set::SparseSet;
pub use word_set::WordSet;

// mod contract_tests
