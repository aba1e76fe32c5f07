//! # Pattern Execution
//!
//! * [`PikeVm`] - runs a [`Program`](crate::compile::Program) over input bytes.
//! * [`MatchCache`] - reusable per-thread scratch memory for the VM.
//! * [`MatchResult`] - the outcome of one match call.

pub mod match_result;
pub mod pike_vm;
pub mod sparse_set;

#[doc(inline)]
pub use match_result::MatchResult;
#[doc(inline)]
pub use pike_vm::{MatchCache, PikeVm, SearchMode, assert_holds};
#[doc(inline)]
pub use sparse_set::SparseSet;
