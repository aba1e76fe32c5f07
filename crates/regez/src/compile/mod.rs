//! # Program Compilation
//!
//! * [`Program`] - the immutable instruction form of a pattern.
//! * [`compile`] - lowers an [`Ast`](crate::syntax::Ast) into a [`Program`].

pub mod compiler;
pub mod program;

#[doc(inline)]
pub use compiler::compile;
#[doc(inline)]
pub use program::{ClassId, Inst, InstPtr, Program};
