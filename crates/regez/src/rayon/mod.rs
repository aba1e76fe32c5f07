//! # Rayon Batch Matching
//!
//! Requires the `rayon` feature.

pub mod parallel_regex;

#[doc(inline)]
pub use parallel_regex::ParallelRegex;
