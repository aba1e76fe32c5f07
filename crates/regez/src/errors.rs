//! # Error Types

use crate::alloc::string::String;

/// Reasons a pattern fails to parse.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// An opening parenthesis with no matching close.
    #[error("unclosed group")]
    UnclosedGroup,

    /// A closing parenthesis with no matching open.
    #[error("unopened group")]
    UnopenedGroup,

    /// A bracket expression with no closing `]`.
    #[error("unclosed bracket expression")]
    UnclosedBracket,

    /// A bracket range whose end sorts before its start.
    #[error("invalid range {start:?}-{end:?}")]
    InvalidRange {
        /// Range start.
        start: char,
        /// Range end.
        end: char,
    },

    /// A repetition bound with `min > max`.
    #[error("invalid repetition bounds {{{min},{max}}}")]
    InvalidRepetition {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },

    /// A repetition bound with no closing brace, or malformed contents.
    #[error("unclosed repetition bound")]
    UnclosedRepetition,

    /// A closure operator with nothing to repeat.
    #[error("repetition operator missing operand")]
    MissingRepetitionOperand,

    /// An alternation with an empty branch.
    #[error("empty alternative")]
    EmptyAlternative,

    /// The pattern ends in a lone backslash.
    #[error("trailing backslash")]
    TrailingBackslash,

    /// A `[:name:]` element with an unknown name.
    #[error("unknown character class name {0:?}")]
    UnknownClassName(String),
}

/// Engine limits which may be exceeded at compile time.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Limit {
    /// Upper bound of a `{m,n}` repetition.
    Repetition,

    /// Number of instructions in the compiled program.
    ProgramSize,

    /// Group and closure nesting depth.
    Nesting,

    /// Capture slots across all instructions: `program.len() * slot_count`.
    SlotTable,
}

/// Failures of structurally valid patterns.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The pattern exceeds a configured engine limit.
    #[error("{limit} limit exceeded: {value} > {max}")]
    LimitExceeded {
        /// Which limit.
        limit: Limit,
        /// The offending value.
        value: usize,
        /// The configured maximum.
        max: usize,
    },

    /// The pattern uses a construct this engine does not implement.
    #[error("unsupported construct at position {position}: {construct}")]
    UnsupportedConstruct {
        /// Byte offset in the pattern.
        position: usize,
        /// Description of the construct.
        construct: String,
    },
}

/// Errors from regez operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegezError {
    /// Malformed pattern text.
    #[error("syntax error at position {position}: {reason}")]
    Syntax {
        /// Byte offset in the pattern.
        position: usize,
        /// What went wrong.
        reason: SyntaxErrorKind,
    },

    /// Pattern is well-formed but cannot be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl RegezError {
    /// Build a [`RegezError::Syntax`].
    pub fn syntax(
        position: usize,
        reason: SyntaxErrorKind,
    ) -> Self {
        Self::Syntax { position, reason }
    }

    /// Build a [`CompileError::LimitExceeded`] error.
    pub fn limit(
        limit: Limit,
        value: usize,
        max: usize,
    ) -> Self {
        CompileError::LimitExceeded { limit, value, max }.into()
    }

    /// Build a [`CompileError::UnsupportedConstruct`] error.
    pub fn unsupported<S: Into<String>>(
        position: usize,
        construct: S,
    ) -> Self {
        CompileError::UnsupportedConstruct {
            position,
            construct: construct.into(),
        }
        .into()
    }

    /// The pattern byte offset associated with this error, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax { position, .. } => Some(*position),
            Self::Compile(CompileError::UnsupportedConstruct { position, .. }) => Some(*position),
            Self::Compile(_) => None,
        }
    }
}

/// Result type for regez operations.
pub type RegezResult<T> = core::result::Result<T, RegezError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::string::ToString;

    #[test]
    fn test_display() {
        let err = RegezError::syntax(3, SyntaxErrorKind::UnclosedGroup);
        assert_eq!(err.to_string(), "syntax error at position 3: unclosed group");
        assert_eq!(err.position(), Some(3));

        let err = RegezError::limit(Limit::Repetition, 100000, 1000);
        assert_eq!(
            err.to_string(),
            "repetition limit exceeded: 100000 > 1000"
        );
        assert_eq!(err.position(), None);
        assert_eq!(
            RegezError::limit(Limit::SlotTable, 60, 54).to_string(),
            "slot_table limit exceeded: 60 > 54"
        );

        let err = RegezError::syntax(
            1,
            SyntaxErrorKind::InvalidRepetition { min: 4, max: 2 },
        );
        assert_eq!(
            err.to_string(),
            "syntax error at position 1: invalid repetition bounds {4,2}"
        );
    }
}
