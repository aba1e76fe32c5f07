//! Regex Options
//!
//! Options for compiling a [`Regex`].

use crate::errors::RegezResult;
use crate::regex::Regex;

/// Engine limits enforced at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompileLimits {
    /// Largest permitted bound in a `{m,n}` repetition.
    pub max_repetition: u32,

    /// Largest permitted compiled program, in instructions.
    pub max_program_len: usize,

    /// Deepest permitted nesting of groups and stacked closures.
    pub nest_limit: u32,

    /// Largest permitted per-search capture slot table.
    ///
    /// The table holds `slot_count` slots for each instruction.
    pub max_slot_table: usize,
}

impl Default for CompileLimits {
    fn default() -> Self {
        Self {
            max_repetition: 1000,
            max_program_len: 100_000,
            nest_limit: 250,
            max_slot_table: 1 << 20,
        }
    }
}

impl CompileLimits {
    /// Get the repetition bound limit.
    pub fn max_repetition(&self) -> u32 {
        self.max_repetition
    }

    /// Set the repetition bound limit.
    pub fn set_max_repetition(
        &mut self,
        max_repetition: u32,
    ) {
        self.max_repetition = max_repetition;
    }

    /// Set the repetition bound limit and return the limits.
    pub fn with_max_repetition(
        mut self,
        max_repetition: u32,
    ) -> Self {
        self.set_max_repetition(max_repetition);
        self
    }

    /// Get the program size limit.
    pub fn max_program_len(&self) -> usize {
        self.max_program_len
    }

    /// Set the program size limit.
    pub fn set_max_program_len(
        &mut self,
        max_program_len: usize,
    ) {
        self.max_program_len = max_program_len;
    }

    /// Set the program size limit and return the limits.
    pub fn with_max_program_len(
        mut self,
        max_program_len: usize,
    ) -> Self {
        self.set_max_program_len(max_program_len);
        self
    }

    /// Get the group nesting limit.
    pub fn nest_limit(&self) -> u32 {
        self.nest_limit
    }

    /// Set the group nesting limit.
    pub fn set_nest_limit(
        &mut self,
        nest_limit: u32,
    ) {
        self.nest_limit = nest_limit;
    }

    /// Set the group nesting limit and return the limits.
    pub fn with_nest_limit(
        mut self,
        nest_limit: u32,
    ) -> Self {
        self.set_nest_limit(nest_limit);
        self
    }

    /// Get the slot table limit.
    pub fn max_slot_table(&self) -> usize {
        self.max_slot_table
    }

    /// Set the slot table limit.
    pub fn set_max_slot_table(
        &mut self,
        max_slot_table: usize,
    ) {
        self.max_slot_table = max_slot_table;
    }

    /// Set the slot table limit and return the limits.
    pub fn with_max_slot_table(
        mut self,
        max_slot_table: usize,
    ) -> Self {
        self.set_max_slot_table(max_slot_table);
        self
    }
}

/// Options for compiling a [`Regex`].
///
/// These mirror the POSIX `regcomp` flags:
/// * `extended` - `REG_EXTENDED`; when off, basic (BRE) syntax is parsed.
/// * `case_insensitive` - `REG_ICASE`; ASCII case folding.
/// * `no_capture` - `REG_NOSUB`; groups do not record spans.
/// * `multiline` - `REG_NEWLINE`; newline-sensitive `.`, `[^...]`, `^` and `$`.
///
/// ## Style Hints
///
/// Instance names should prefer `regex_options`,
/// or `options` when there is no ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegexOptions {
    /// Parse extended (ERE) syntax.
    pub extended: bool,

    /// Fold ASCII case.
    pub case_insensitive: bool,

    /// Compile groups as non-capturing.
    ///
    /// The whole-match span is still reported.
    pub no_capture: bool,

    /// Newline-sensitive matching.
    pub multiline: bool,

    /// Engine limits.
    pub limits: CompileLimits,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            extended: true,
            case_insensitive: false,
            no_capture: false,
            multiline: false,
            limits: CompileLimits::default(),
        }
    }
}

impl RegexOptions {
    /// Is extended syntax enabled?
    pub fn extended(&self) -> bool {
        self.extended
    }

    /// Set whether extended syntax is enabled.
    pub fn set_extended(
        &mut self,
        extended: bool,
    ) {
        self.extended = extended;
    }

    /// Set whether extended syntax is enabled and return the options.
    pub fn with_extended(
        mut self,
        extended: bool,
    ) -> Self {
        self.set_extended(extended);
        self
    }

    /// Is ASCII case folding enabled?
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Set whether ASCII case folding is enabled.
    pub fn set_case_insensitive(
        &mut self,
        case_insensitive: bool,
    ) {
        self.case_insensitive = case_insensitive;
    }

    /// Set whether ASCII case folding is enabled and return the options.
    pub fn with_case_insensitive(
        mut self,
        case_insensitive: bool,
    ) -> Self {
        self.set_case_insensitive(case_insensitive);
        self
    }

    /// Are groups compiled as non-capturing?
    pub fn no_capture(&self) -> bool {
        self.no_capture
    }

    /// Set whether groups are compiled as non-capturing.
    pub fn set_no_capture(
        &mut self,
        no_capture: bool,
    ) {
        self.no_capture = no_capture;
    }

    /// Set whether groups are compiled as non-capturing and return the options.
    pub fn with_no_capture(
        mut self,
        no_capture: bool,
    ) -> Self {
        self.set_no_capture(no_capture);
        self
    }

    /// Is newline-sensitive matching enabled?
    pub fn multiline(&self) -> bool {
        self.multiline
    }

    /// Set whether newline-sensitive matching is enabled.
    pub fn set_multiline(
        &mut self,
        multiline: bool,
    ) {
        self.multiline = multiline;
    }

    /// Set whether newline-sensitive matching is enabled and return the options.
    pub fn with_multiline(
        mut self,
        multiline: bool,
    ) -> Self {
        self.set_multiline(multiline);
        self
    }

    /// Get the engine limits.
    pub fn limits(&self) -> &CompileLimits {
        &self.limits
    }

    /// Set the engine limits.
    pub fn set_limits(
        &mut self,
        limits: CompileLimits,
    ) {
        self.limits = limits;
    }

    /// Set the engine limits and return the options.
    pub fn with_limits(
        mut self,
        limits: CompileLimits,
    ) -> Self {
        self.set_limits(limits);
        self
    }

    /// Compile `pattern` with these options.
    pub fn compile(
        &self,
        pattern: &str,
    ) -> RegezResult<Regex> {
        Regex::with_options(pattern, *self)
    }
}
