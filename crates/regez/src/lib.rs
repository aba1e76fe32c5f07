//! # `regez` Regular Expressions
//!
//! A linear-time POSIX-style regular expression engine.
//!
//! Patterns are parsed, compiled into a small instruction program, and
//! executed by a Pike VM (a Thompson NFA simulation which carries capture
//! slots). Matching never backtracks, so every search runs in
//! `O(input.len() * program.len())` time.
//!
//! See:
//! * [`Regex`] - the compiled, immutable, thread-shareable handle.
//! * [`RegexOptions`] - extended / basic syntax, case folding, capture and
//!   newline modes, and engine limits.
//! * [`MatchResult`] - the outcome of a capturing match.
//! * [`syntax`], [`compile`](mod@compile) and [`exec`] - the pipeline stages.
//!
//! Alternation is leftmost-first: the earliest alternative which can
//! complete a match wins, and closures are greedy.
//!
//! ```rust
//! use regez::{Regex, RegexOptions};
//!
//! let re = Regex::new("([a-z]+)-([0-9]{2,4})")?;
//! assert!(re.is_match("id abc-123"));
//!
//! let result = re.find_captures("id abc-123");
//! assert_eq!(result.span(), Some(3..10));
//! assert_eq!(result.get(2), Some(7..10));
//!
//! let re = RegexOptions::default()
//!     .with_case_insensitive(true)
//!     .with_no_capture(true)
//!     .compile("^abc$")?;
//! assert!(re.is_match("ABC"));
//! # Ok::<(), regez::RegezError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
pub mod cache;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod compile;
pub mod errors;
pub mod exec;
pub mod options;
pub mod regex;
pub mod syntax;
pub mod types;

#[cfg(feature = "std")]
#[doc(inline)]
pub use cache::RegexCache;
#[doc(inline)]
pub use errors::{CompileError, RegezError, RegezResult, SyntaxErrorKind};
#[doc(inline)]
pub use exec::{MatchCache, MatchResult};
#[doc(inline)]
pub use options::{CompileLimits, RegexOptions};
#[doc(inline)]
pub use regex::{Matches, Regex};

/// Compile `pattern` under `options`.
///
/// ## Returns
/// The compiled handle; no partial handle is ever returned on error.
pub fn compile(
    pattern: &str,
    options: &RegexOptions,
) -> RegezResult<Regex> {
    options.compile(pattern)
}

/// Does `regex` match anywhere in `text`?
///
/// No capture state is computed.
pub fn is_match(
    regex: &Regex,
    text: &str,
) -> bool {
    regex.is_match(text)
}

/// The leftmost-first match of `regex` in `text`, with every group span.
pub fn find_captures(
    regex: &Regex,
    text: &str,
) -> MatchResult {
    regex.find_captures(text)
}

/// Release a compiled handle.
pub fn release(regex: Regex) {
    regex.release()
}
