//! # Pattern Syntax
//!
//! Turns pattern text into an [`Ast`]:
//! * [`ByteSet`] - the byte sets literals and brackets lower to.
//! * [`Ast`] - the parsed tree.
//! * [`parse`] - the parser, for both extended and basic syntax.

pub mod ast;
pub mod byte_set;
pub mod parser;

#[doc(inline)]
pub use ast::{AnchorKind, Ast};
#[doc(inline)]
pub use byte_set::{ByteSet, NamedClass, is_word_byte};
#[doc(inline)]
pub use parser::parse;
