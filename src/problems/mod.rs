//! Problem implementations for the layered DP engine.
//!
//! - [`patience`] : O(n log n) longest strictly increasing subsequence with
//!   checkpointed witness reconstruction.

pub mod patience;
