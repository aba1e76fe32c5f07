//! # Pattern AST

use crate::alloc::boxed::Box;
use crate::alloc::vec::Vec;
use crate::syntax::ByteSet;

/// Zero-width assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum AnchorKind {
    /// `^`: start of input, or of a line in multiline mode.
    #[strum(to_string = "^")]
    Start,

    /// `$`: end of input, or of a line in multiline mode.
    #[strum(to_string = "$")]
    End,

    /// `\b`: between a word byte and a non-word byte.
    #[strum(to_string = "\\b")]
    WordBoundary,

    /// `\B`: not at a word boundary.
    #[strum(to_string = "\\B")]
    NotWordBoundary,

    /// `\<`: a non-word byte (or start) followed by a word byte.
    #[strum(to_string = "\\<")]
    WordStart,

    /// `\>`: a word byte followed by a non-word byte (or end).
    #[strum(to_string = "\\>")]
    WordEnd,
}

/// A node of a parsed pattern.
///
/// Children are exclusively owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// Matches the empty string, as in `()`.
    Empty,

    /// Matches one byte from the set.
    Literal(ByteSet),

    /// Matches each child in order.
    Concat(Vec<Ast>),

    /// Matches one child; earlier children are preferred.
    Alternate(Vec<Ast>),

    /// Matches `child` between `min` and `max` times, greedily.
    ///
    /// `max == None` is unbounded.
    Closure {
        /// The repeated node.
        child: Box<Ast>,
        /// Mandatory repetitions.
        min: u32,
        /// Maximum repetitions, if bounded.
        max: Option<u32>,
    },

    /// A parenthesized sub-pattern.
    Group {
        /// The grouped node.
        child: Box<Ast>,
        /// 1-based capture index, in order of the opening parenthesis.
        capture: Option<u32>,
    },

    /// A zero-width assertion.
    Anchor(AnchorKind),
}

impl Ast {
    /// Build a closure node.
    pub fn closure(
        child: Ast,
        min: u32,
        max: Option<u32>,
    ) -> Self {
        Self::Closure {
            child: Box::new(child),
            min,
            max,
        }
    }

    /// Build a group node.
    pub fn group(
        child: Ast,
        capture: Option<u32>,
    ) -> Self {
        Self::Group {
            child: Box::new(child),
            capture,
        }
    }

    /// Collapse a sequence: empty is [`Ast::Empty`], singletons unwrap.
    pub fn concat(mut items: Vec<Ast>) -> Self {
        match items.len() {
            0 => Self::Empty,
            1 => items.pop().unwrap_or(Self::Empty),
            _ => Self::Concat(items),
        }
    }

    /// Collapse a choice: singletons unwrap.
    pub fn alternate(mut branches: Vec<Ast>) -> Self {
        match branches.len() {
            0 => Self::Empty,
            1 => branches.pop().unwrap_or(Self::Empty),
            _ => Self::Alternate(branches),
        }
    }

    /// Number of capturing groups in this tree.
    pub fn capture_count(&self) -> u32 {
        match self {
            Self::Empty | Self::Literal(_) | Self::Anchor(_) => 0,
            Self::Concat(items) | Self::Alternate(items) => {
                items.iter().map(Ast::capture_count).sum()
            }
            Self::Closure { child, .. } => child.capture_count(),
            Self::Group { child, capture } => {
                child.capture_count() + u32::from(capture.is_some())
            }
        }
    }

    /// Does every match of this node begin with a `^` assertion?
    ///
    /// Only meaningful outside multiline mode.
    pub fn is_anchored_start(&self) -> bool {
        match self {
            Self::Anchor(AnchorKind::Start) => true,
            Self::Concat(items) => items.first().is_some_and(Ast::is_anchored_start),
            Self::Alternate(branches) => branches.iter().all(Ast::is_anchored_start),
            Self::Group { child, .. } => child.is_anchored_start(),
            Self::Closure { child, min, .. } => *min > 0 && child.is_anchored_start(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    fn lit(byte: u8) -> Ast {
        Ast::Literal(ByteSet::singleton(byte))
    }

    #[test]
    fn test_collapse() {
        assert_eq!(Ast::concat(vec![]), Ast::Empty);
        assert_eq!(Ast::concat(vec![lit(b'a')]), lit(b'a'));
        assert_eq!(
            Ast::alternate(vec![lit(b'a'), lit(b'b')]),
            Ast::Alternate(vec![lit(b'a'), lit(b'b')])
        );
    }

    #[test]
    fn test_capture_count() {
        let ast = Ast::concat(vec![
            Ast::group(lit(b'a'), Some(1)),
            Ast::group(Ast::group(lit(b'b'), Some(3)), Some(2)),
            Ast::group(lit(b'c'), None),
        ]);
        assert_eq!(ast.capture_count(), 3);
    }

    #[test]
    fn test_is_anchored_start() {
        let start = Ast::Anchor(AnchorKind::Start);
        assert!(Ast::concat(vec![start.clone(), lit(b'a')]).is_anchored_start());
        assert!(!Ast::concat(vec![lit(b'a'), start.clone()]).is_anchored_start());
        assert!(
            !Ast::alternate(vec![
                Ast::concat(vec![start.clone(), lit(b'a')]),
                lit(b'b')
            ])
            .is_anchored_start()
        );
        assert!(!Ast::closure(start.clone(), 0, None).is_anchored_start());
        assert!(Ast::group(start, Some(1)).is_anchored_start());
    }
}
