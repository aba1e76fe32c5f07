//! # Compiled Program
//!
//! The instruction form of a pattern, executed by the
//! [`PikeVm`](crate::exec::PikeVm).

use core::fmt;

use crate::alloc::vec::Vec;
use crate::syntax::{AnchorKind, ByteSet};

/// Index of an instruction in a [`Program`].
pub type InstPtr = usize;

/// Index of an interned [`ByteSet`] in a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    /// The table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single program instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inst {
    /// Consume one byte equal to the operand.
    Byte(u8),

    /// Consume one byte from the class table entry.
    Class(ClassId),

    /// Fork; the first target has priority.
    Split(InstPtr, InstPtr),

    /// Continue at the target.
    Jump(InstPtr),

    /// Record the current position in a capture slot.
    Save(usize),

    /// Continue only if the assertion holds at the current position.
    Assert(AnchorKind),

    /// Accept.
    Match,
}

impl Inst {
    /// Does this instruction consume input (or accept)?
    ///
    /// These are the instructions threads wait on between steps.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Inst::Byte(_) | Inst::Class(_) | Inst::Match)
    }
}

/// An immutable compiled program.
///
/// Execution begins at instruction 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub(crate) insts: Vec<Inst>,
    pub(crate) classes: Vec<ByteSet>,
    pub(crate) slot_count: usize,
    pub(crate) anchored_start: bool,
    pub(crate) multiline: bool,
}

impl Program {
    /// The instruction sequence.
    pub fn insts(&self) -> &[Inst] {
        &self.insts
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.insts.len()
    }

    /// Is the program empty?
    ///
    /// Compiled programs always hold at least `Match`.
    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    /// The interned class table.
    pub fn classes(&self) -> &[ByteSet] {
        &self.classes
    }

    /// Look up an interned class.
    #[inline]
    pub fn class(
        &self,
        id: ClassId,
    ) -> &ByteSet {
        &self.classes[id.index()]
    }

    /// Number of capture slots, two per reported group.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Number of reported groups, including the whole match.
    pub fn group_count(&self) -> usize {
        self.slot_count / 2
    }

    /// Can matches only begin at the start of input?
    pub fn is_anchored_start(&self) -> bool {
        self.anchored_start
    }

    /// Were anchors compiled newline-sensitive?
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }
}

impl fmt::Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (pc, inst) in self.insts.iter().enumerate() {
            write!(f, "{pc:04} ")?;
            match inst {
                Inst::Byte(b) => writeln!(f, "byte {}", b.escape_ascii())?,
                Inst::Class(id) => writeln!(f, "class #{} {}", id.0, self.class(*id))?,
                Inst::Split(a, b) => writeln!(f, "split {a:04}, {b:04}")?,
                Inst::Jump(t) => writeln!(f, "jump {t:04}")?,
                Inst::Save(slot) => writeln!(f, "save {slot}")?,
                Inst::Assert(kind) => writeln!(f, "assert {kind}")?,
                Inst::Match => writeln!(f, "match")?,
            }
        }
        Ok(())
    }
}
