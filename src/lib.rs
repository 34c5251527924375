//! Longest strictly increasing subsequence (LIS)
//!
//! This crate computes the length of the longest strictly increasing
//! subsequence of a sequence of `i64`, and optionally one witness
//! subsequence.
//!
//! ## Strategies
//! [`strategies`] holds four interchangeable formulations that agree on every
//! input: the plain include/skip recursion, its memoized form, the quadratic
//! `best[i]` table, and the O(n log n) smallest-tail method. [`lis_length`]
//! uses the last one.
//!
//! ## Engine
//! The smallest-tail method is expressed as a layered DP ([`LayeredDp`]) and
//! run by [`LisEngine`], which checkpoints the frontier every ≈ √n layers and
//! rebuilds a witness block by block from the right.
//!
//! ```
//! use lis_dp::{LisEngine, problems::patience::PatienceProblem};
//!
//! let seq = [3, 1, 4, 1, 5, 9, 2, 6];
//! let (len, witness) = LisEngine::new(PatienceProblem::new(&seq)).run();
//! assert_eq!(len, lis_dp::lis_length(&seq));
//! assert_eq!(witness.len(), 4);
//! ```
//!
//! ## Input
//! [`input::read_sequence`] reads one line of whitespace-separated integers
//! and reports the first malformed token as an [`InvalidInputError`].

pub mod blocks;
pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod error;
pub mod input;
pub mod problems;
pub mod strategies;
pub mod traits;
pub mod utils;

pub use crate::builder::EngineBuilder;
pub use crate::engine::LisEngine;
pub use crate::error::{InvalidInputError, ReadError};
pub use crate::strategies::{lis_length, Strategy};
pub use crate::traits::{LayeredDp, Reconstruct};
