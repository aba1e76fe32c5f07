//! # Compiled Regex Handle
//!
//! [`Regex`] is the immutable, shareable result of compiling a pattern.
//! Every match call owns its transient state, so one handle may be used from
//! many threads at once.

use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use crate::alloc::string::{String, ToString};
use crate::compile::{Program, compile};
use crate::errors::{RegezError, RegezResult};
use crate::exec::{MatchCache, MatchResult, PikeVm, SearchMode};
use crate::options::RegexOptions;
use crate::syntax::parse;

/// A compiled pattern.
///
/// ## Spans
///
/// Every span is a range of byte offsets into the input. Matching is
/// byte-oriented: `.` and negated brackets consume a single byte, so a span
/// may start or end inside a multi-byte UTF-8 character. Slice the input as
/// bytes (`&text.as_bytes()[span]`) unless the pattern only matches whole
/// characters.
///
/// ## Style Hints
///
/// Instance names should prefer `regex`, or `re` in short scopes.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    options: RegexOptions,
    program: Program,
}

impl Regex {
    /// Compile `pattern` with the default (extended syntax) options.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text.
    ///
    /// ## Returns
    /// The compiled handle, or the syntax / compile error.
    pub fn new(pattern: &str) -> RegezResult<Self> {
        Self::with_options(pattern, RegexOptions::default())
    }

    /// Compile `pattern` with `options`.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text.
    /// * `options` - syntax, capture and limit options.
    ///
    /// ## Returns
    /// The compiled handle, or the syntax / compile error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(options)))]
    pub fn with_options(
        pattern: &str,
        options: RegexOptions,
    ) -> RegezResult<Self> {
        let ast = parse(pattern, &options)?;
        let program = compile(&ast, &options)?;
        log::debug!(
            "compiled {pattern:?}: {} instructions, {} groups",
            program.len(),
            program.group_count()
        );
        Ok(Self {
            pattern: pattern.to_string(),
            options,
            program,
        })
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The options this handle was compiled with.
    pub fn options(&self) -> &RegexOptions {
        &self.options
    }

    /// Number of reported groups, including the whole match.
    ///
    /// This is 1 for handles compiled with `no_capture`.
    pub fn captures_len(&self) -> usize {
        self.program.group_count()
    }

    /// The compiled program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Create scratch memory sized for this handle.
    pub fn create_cache(&self) -> MatchCache {
        MatchCache::new(&self.program)
    }

    fn vm(&self) -> PikeVm<'_> {
        PikeVm::new(&self.program)
    }

    /// Does the pattern match anywhere in `text`?
    ///
    /// No capture state is computed.
    pub fn is_match(
        &self,
        text: &str,
    ) -> bool {
        self.is_match_bytes(text.as_bytes())
    }

    /// Does the pattern match anywhere in `input`?
    pub fn is_match_bytes(
        &self,
        input: &[u8],
    ) -> bool {
        self.is_match_with(input, &mut MatchCache::default())
    }

    /// [`Regex::is_match_bytes`] using caller-provided scratch memory.
    pub fn is_match_with(
        &self,
        input: &[u8],
        cache: &mut MatchCache,
    ) -> bool {
        self.vm().is_match(input, 0, cache)
    }

    /// The span of the leftmost-first match in `text`.
    ///
    /// The span is in bytes and need not fall on character boundaries.
    pub fn find(
        &self,
        text: &str,
    ) -> Option<Range<usize>> {
        self.find_at(text, 0)
    }

    /// The span of the leftmost-first match in `text` beginning at or after `start`.
    ///
    /// Assertions see the whole of `text`; `start` past the end is no match.
    pub fn find_at(
        &self,
        text: &str,
        start: usize,
    ) -> Option<Range<usize>> {
        self.find_at_with(text.as_bytes(), start, &mut MatchCache::default())
    }

    /// [`Regex::find_at`] over bytes using caller-provided scratch memory.
    pub fn find_at_with(
        &self,
        input: &[u8],
        start: usize,
        cache: &mut MatchCache,
    ) -> Option<Range<usize>> {
        if start > input.len() {
            return None;
        }
        self.vm()
            .search(input, start, SearchMode::Captures, cache)
            .span()
    }

    /// The leftmost-first match in `text` with every group span.
    pub fn find_captures(
        &self,
        text: &str,
    ) -> MatchResult {
        self.find_captures_bytes(text.as_bytes())
    }

    /// The leftmost-first match in `input` with every group span.
    pub fn find_captures_bytes(
        &self,
        input: &[u8],
    ) -> MatchResult {
        self.find_captures_with(input, &mut MatchCache::default())
    }

    /// [`Regex::find_captures_bytes`] using caller-provided scratch memory.
    pub fn find_captures_with(
        &self,
        input: &[u8],
        cache: &mut MatchCache,
    ) -> MatchResult {
        self.vm().search(input, 0, SearchMode::Captures, cache)
    }

    /// Iterate the successive non-overlapping matches in `text`.
    pub fn find_iter<'r, 'h>(
        &'r self,
        text: &'h str,
    ) -> Matches<'r, 'h> {
        Matches {
            regex: self,
            text,
            cache: self.create_cache(),
            last_end: 0,
            last_match: None,
        }
    }

    /// Release the handle.
    ///
    /// The handle is consumed; it cannot be used afterwards.
    pub fn release(self) {
        log::trace!("released {:?}", self.pattern);
    }
}

impl fmt::Display for Regex {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<Regex> for Regex {
    fn as_ref(&self) -> &Regex {
        self
    }
}

impl FromStr for Regex {
    type Err = RegezError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

/// Iterator over successive non-overlapping match spans.
///
/// An empty match directly after the previous match is skipped, and the
/// search resumes at the next character boundary after an empty match.
/// Non-empty matches are byte spans; see [`Regex`] on splitting characters.
#[derive(Debug)]
pub struct Matches<'r, 'h> {
    regex: &'r Regex,
    text: &'h str,
    cache: MatchCache,
    last_end: usize,
    last_match: Option<usize>,
}

impl Matches<'_, '_> {
    fn next_boundary(
        &self,
        at: usize,
    ) -> usize {
        let mut next = at + 1;
        while next < self.text.len() && !self.text.is_char_boundary(next) {
            next += 1;
        }
        next
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let span =
                self.regex
                    .find_at_with(self.text.as_bytes(), self.last_end, &mut self.cache)?;

            if span.is_empty() {
                self.last_end = self.next_boundary(span.end);
                if self.last_match == Some(span.end) {
                    continue;
                }
            } else {
                self.last_end = span.end;
            }
            self.last_match = Some(span.end);
            return Some(span);
        }
    }
}
