//! # Pike VM
//!
//! A Thompson simulation of a [`Program`] which carries capture slots per
//! thread. Every input byte is visited once per live instruction, so
//! matching is `O(input.len() * program.len())` regardless of the pattern.
//!
//! Thread priority follows `Split` order; once a thread accepts, every
//! lower-priority thread is cut, which yields leftmost-first results.

use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::compile::{Inst, InstPtr, Program};
use crate::exec::{MatchResult, SparseSet};
use crate::syntax::{AnchorKind, is_word_byte};

/// What a search records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Acceptance only; no slot storage is used.
    MatchOnly,

    /// Record the span of every group.
    Captures,
}

/// One step's worth of threads.
#[derive(Debug, Clone, Default)]
struct Threads {
    set: SparseSet,
    slots: Vec<Option<usize>>,
    stride: usize,
}

impl Threads {
    fn reset(
        &mut self,
        len: usize,
        stride: usize,
    ) {
        if self.set.capacity() != len {
            self.set.resize(len);
        }
        self.set.clear();
        self.stride = stride;
        self.slots.clear();
        self.slots.resize(len * stride, None);
    }

    #[inline]
    fn slots(
        &self,
        pc: InstPtr,
    ) -> &[Option<usize>] {
        &self.slots[pc * self.stride..(pc + 1) * self.stride]
    }

    #[inline]
    fn slots_mut(
        &mut self,
        pc: InstPtr,
    ) -> &mut [Option<usize>] {
        &mut self.slots[pc * self.stride..(pc + 1) * self.stride]
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Follow epsilon transitions from this instruction.
    Explore(InstPtr),

    /// Undo a `Save` once its subtree has been explored.
    Restore { slot: usize, value: Option<usize> },
}

/// Reusable scratch memory for [`PikeVm`] searches.
///
/// A cache may be used with any program; it is resized on each search.
/// Use one cache per thread.
#[derive(Debug, Clone, Default)]
pub struct MatchCache {
    clist: Threads,
    nlist: Threads,
    stack: Vec<Frame>,
    scratch: Vec<Option<usize>>,
}

impl MatchCache {
    /// Create a cache sized for `program`.
    pub fn new(program: &Program) -> Self {
        let mut cache = Self::default();
        cache.reset(program, SearchMode::Captures);
        cache
    }

    fn reset(
        &mut self,
        program: &Program,
        mode: SearchMode,
    ) {
        let stride = match mode {
            SearchMode::MatchOnly => 0,
            SearchMode::Captures => program.slot_count(),
        };
        self.clist.reset(program.len(), stride);
        self.nlist.reset(program.len(), stride);
        self.stack.clear();
        self.scratch.clear();
        self.scratch.resize(stride, None);
    }

    /// Size of the per-thread capture slot storage, in slots.
    ///
    /// This is zero after a [`SearchMode::MatchOnly`] search.
    pub fn slot_capacity(&self) -> usize {
        self.clist.slots.len() + self.nlist.slots.len() + self.scratch.len()
    }
}

/// Executes a [`Program`].
#[derive(Debug, Clone, Copy)]
pub struct PikeVm<'p> {
    program: &'p Program,
}

impl<'p> PikeVm<'p> {
    /// Create a VM for `program`.
    pub fn new(program: &'p Program) -> Self {
        Self { program }
    }

    /// The program being executed.
    pub fn program(&self) -> &'p Program {
        self.program
    }

    /// Search `input` for the leftmost-first match beginning at or after `start`.
    ///
    /// Assertions see the whole of `input`, so `^` does not hold at
    /// `start > 0` outside multiline mode.
    ///
    /// ## Arguments
    /// * `input` - the haystack.
    /// * `start` - the first candidate match position; must be `<= input.len()`.
    /// * `mode` - whether to record group spans.
    /// * `cache` - scratch memory.
    pub fn search(
        &self,
        input: &[u8],
        start: usize,
        mode: SearchMode,
        cache: &mut MatchCache,
    ) -> MatchResult {
        debug_assert!(start <= input.len());
        cache.reset(self.program, mode);

        let mut found = vec![None; cache.scratch.len()];
        if self.run(input, start, mode, cache, &mut found) {
            match mode {
                SearchMode::MatchOnly => MatchResult::matched_only(),
                SearchMode::Captures => MatchResult::from_slots(&found),
            }
        } else {
            MatchResult::no_match()
        }
    }

    /// Does `program` match anywhere in `input` at or after `start`?
    pub fn is_match(
        &self,
        input: &[u8],
        start: usize,
        cache: &mut MatchCache,
    ) -> bool {
        self.search(input, start, SearchMode::MatchOnly, cache)
            .is_match()
    }

    fn run(
        &self,
        input: &[u8],
        start: usize,
        mode: SearchMode,
        cache: &mut MatchCache,
        found: &mut [Option<usize>],
    ) -> bool {
        let MatchCache {
            clist,
            nlist,
            stack,
            scratch,
        } = cache;

        let anchored = self.program.is_anchored_start();
        let mut matched = false;
        let mut at = start;

        loop {
            if clist.set.is_empty() && (matched || (anchored && at > 0)) {
                break;
            }

            if !matched {
                scratch.fill(None);
                self.epsilon_closure(clist, stack, scratch, 0, input, at);
            }

            let next = input.get(at).copied();
            for &pc in clist.set.as_slice() {
                let advance = match self.program.insts()[pc] {
                    Inst::Byte(byte) => next == Some(byte),
                    Inst::Class(id) => next.is_some_and(|b| self.program.class(id).contains(b)),
                    Inst::Match => {
                        if mode == SearchMode::MatchOnly {
                            return true;
                        }
                        found.copy_from_slice(clist.slots(pc));
                        matched = true;
                        break;
                    }
                    _ => false,
                };
                if advance {
                    scratch.copy_from_slice(clist.slots(pc));
                    self.epsilon_closure(nlist, stack, scratch, pc + 1, input, at + 1);
                }
            }

            if at >= input.len() {
                break;
            }
            core::mem::swap(clist, nlist);
            nlist.set.clear();
            at += 1;
        }
        matched
    }

    /// Add `pc` and everything reachable from it without consuming input.
    ///
    /// `slots` holds the thread's captures on entry and is restored on exit.
    fn epsilon_closure(
        &self,
        list: &mut Threads,
        stack: &mut Vec<Frame>,
        slots: &mut [Option<usize>],
        pc: InstPtr,
        input: &[u8],
        at: usize,
    ) {
        debug_assert!(stack.is_empty());
        debug_assert_eq!(slots.len(), list.stride);

        stack.push(Frame::Explore(pc));
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Explore(pc) => self.explore(list, stack, slots, pc, input, at),
                Frame::Restore { slot, value } => slots[slot] = value,
            }
        }
    }

    fn explore(
        &self,
        list: &mut Threads,
        stack: &mut Vec<Frame>,
        slots: &mut [Option<usize>],
        mut pc: InstPtr,
        input: &[u8],
        at: usize,
    ) {
        loop {
            if !list.set.insert(pc) {
                return;
            }
            match self.program.insts()[pc] {
                Inst::Byte(_) | Inst::Class(_) | Inst::Match => {
                    list.slots_mut(pc).copy_from_slice(slots);
                    return;
                }
                Inst::Jump(target) => pc = target,
                Inst::Split(primary, secondary) => {
                    stack.push(Frame::Explore(secondary));
                    pc = primary;
                }
                Inst::Save(slot) => {
                    if let Some(value) = slots.get_mut(slot) {
                        stack.push(Frame::Restore {
                            slot,
                            value: *value,
                        });
                        *value = Some(at);
                    }
                    pc += 1;
                }
                Inst::Assert(kind) => {
                    if !assert_holds(kind, input, at, self.program.is_multiline()) {
                        return;
                    }
                    pc += 1;
                }
            }
        }
    }
}

/// Does the zero-width assertion `kind` hold at position `at` of `input`?
pub fn assert_holds(
    kind: AnchorKind,
    input: &[u8],
    at: usize,
    multiline: bool,
) -> bool {
    let prev = at.checked_sub(1).and_then(|i| input.get(i)).copied();
    let next = input.get(at).copied();
    match kind {
        AnchorKind::Start => at == 0 || (multiline && prev == Some(b'\n')),
        AnchorKind::End => at == input.len() || (multiline && next == Some(b'\n')),
        _ => {
            let before = prev.is_some_and(is_word_byte);
            let after = next.is_some_and(is_word_byte);
            match kind {
                AnchorKind::WordBoundary => before != after,
                AnchorKind::NotWordBoundary => before == after,
                AnchorKind::WordStart => !before && after,
                _ => before && !after,
            }
        }
    }
}
