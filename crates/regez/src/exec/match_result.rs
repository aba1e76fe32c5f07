//! # Match Results

use core::ops::Range;

use crate::alloc::vec::Vec;

/// The outcome of one match call.
///
/// Group 0 is the whole match; group `i` is the `i`-th capturing group.
/// Groups which did not participate in the match are `None`.
///
/// Match-only searches report `matched` with no groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchResult {
    matched: bool,
    groups: Vec<Option<Range<usize>>>,
}

impl MatchResult {
    /// The result of a failed match.
    pub fn no_match() -> Self {
        Self::default()
    }

    /// A successful match with no recorded spans.
    pub fn matched_only() -> Self {
        Self {
            matched: true,
            groups: Vec::new(),
        }
    }

    /// Build a successful match from a capture slot buffer.
    ///
    /// Slot `2i` is the start of group `i`, slot `2i + 1` its end.
    pub fn from_slots(slots: &[Option<usize>]) -> Self {
        debug_assert!(slots.len() % 2 == 0);
        let groups = slots
            .chunks_exact(2)
            .map(|pair| match (pair[0], pair[1]) {
                (Some(start), Some(end)) => Some(start..end),
                _ => None,
            })
            .collect();
        Self {
            matched: true,
            groups,
        }
    }

    /// Did the pattern match?
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// The span of the whole match, if recorded.
    pub fn span(&self) -> Option<Range<usize>> {
        self.get(0)
    }

    /// The span of group `index`, if it participated.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<Range<usize>> {
        self.groups.get(index).cloned().flatten()
    }

    /// Number of reported groups, including group 0.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Are there no reported groups?
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The reported groups.
    pub fn groups(&self) -> &[Option<Range<usize>>] {
        &self.groups
    }

    /// Iterate the reported groups.
    pub fn iter(&self) -> impl Iterator<Item = Option<Range<usize>>> + '_ {
        self.groups.iter().cloned()
    }
}
