//! # Program Compiler
//!
//! Lowers an [`Ast`] into a [`Program`].
//!
//! Every fragment is emitted so that its entry is its first instruction and
//! its exit falls through to the next one; forward targets are emitted as
//! placeholders and patched once the fragment end is known.

use crate::alloc::vec::Vec;
use crate::compile::{ClassId, Inst, InstPtr, Program};
use crate::errors::{Limit, RegezError, RegezResult};
use crate::options::RegexOptions;
use crate::syntax::{Ast, ByteSet};
use crate::types::{RzHashMap, hash_map_new};

/// Compile `ast` under `options`.
///
/// ## Arguments
/// * `ast` - the parsed pattern.
/// * `options` - capture mode and engine limits.
///
/// ## Returns
/// The [`Program`], or a `LimitExceeded` error; no partial program is returned.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(ast, options)))]
pub fn compile(
    ast: &Ast,
    options: &RegexOptions,
) -> RegezResult<Program> {
    let mut compiler = Compiler::new(options);

    compiler.push(Inst::Save(0))?;
    compiler.c(ast)?;
    compiler.push(Inst::Save(1))?;
    compiler.push(Inst::Match)?;

    let slot_count = if options.no_capture() {
        2
    } else {
        2 * (ast.capture_count() as usize + 1)
    };

    let slot_table = compiler.insts.len().saturating_mul(slot_count);
    let max_slot_table = options.limits().max_slot_table();
    if slot_table > max_slot_table {
        return Err(RegezError::limit(Limit::SlotTable, slot_table, max_slot_table));
    }

    let program = Program {
        insts: compiler.insts,
        classes: compiler.classes,
        slot_count,
        anchored_start: !options.multiline() && ast.is_anchored_start(),
        multiline: options.multiline(),
    };

    log::debug!(
        "compiled program: {} instructions, {} classes, {} slots",
        program.len(),
        program.classes().len(),
        program.slot_count()
    );
    log::trace!("program listing:\n{program}");

    Ok(program)
}

struct Compiler<'o> {
    options: &'o RegexOptions,
    insts: Vec<Inst>,
    classes: Vec<ByteSet>,
    class_ids: RzHashMap<ByteSet, ClassId>,
}

impl<'o> Compiler<'o> {
    fn new(options: &'o RegexOptions) -> Self {
        Self {
            options,
            insts: Vec::new(),
            classes: Vec::new(),
            class_ids: hash_map_new(),
        }
    }

    /// The next instruction pointer.
    fn pc(&self) -> InstPtr {
        self.insts.len()
    }

    fn push(
        &mut self,
        inst: Inst,
    ) -> RegezResult<InstPtr> {
        let max = self.options.limits().max_program_len();
        if self.insts.len() >= max {
            return Err(RegezError::limit(
                Limit::ProgramSize,
                self.insts.len() + 1,
                max,
            ));
        }
        self.insts.push(inst);
        Ok(self.insts.len() - 1)
    }

    /// Point a placeholder instruction at its final target(s).
    fn patch(
        &mut self,
        pc: InstPtr,
        inst: Inst,
    ) {
        debug_assert!(matches!(
            self.insts[pc],
            Inst::Split(..) | Inst::Jump(_)
        ));
        self.insts[pc] = inst;
    }

    fn intern(
        &mut self,
        set: &ByteSet,
    ) -> ClassId {
        if let Some(id) = self.class_ids.get(set) {
            return *id;
        }
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(*set);
        self.class_ids.insert(*set, id);
        id
    }

    fn c(
        &mut self,
        ast: &Ast,
    ) -> RegezResult<()> {
        match ast {
            Ast::Empty => {}
            Ast::Literal(set) => {
                let inst = match set.as_singleton() {
                    Some(byte) => Inst::Byte(byte),
                    None => Inst::Class(self.intern(set)),
                };
                self.push(inst)?;
            }
            Ast::Anchor(kind) => {
                self.push(Inst::Assert(*kind))?;
            }
            Ast::Concat(items) => {
                for item in items {
                    self.c(item)?;
                }
            }
            Ast::Alternate(branches) => self.c_alternate(branches)?,
            Ast::Group { child, capture } => match capture.filter(|_| !self.options.no_capture()) {
                Some(index) => {
                    let slot = 2 * index as usize;
                    self.push(Inst::Save(slot))?;
                    self.c(child)?;
                    self.push(Inst::Save(slot + 1))?;
                }
                None => self.c(child)?,
            },
            Ast::Closure { child, min, max } => self.c_closure(child, *min, *max)?,
        }
        Ok(())
    }

    /// `a|b|c` as a chain of splits, each preferring the earlier branch.
    fn c_alternate(
        &mut self,
        branches: &[Ast],
    ) -> RegezResult<()> {
        let mut exits = Vec::with_capacity(branches.len());
        let last = branches.len().saturating_sub(1);

        for (idx, branch) in branches.iter().enumerate() {
            if idx == last {
                self.c(branch)?;
                break;
            }
            let split = self.push(Inst::Split(0, 0))?;
            self.c(branch)?;
            exits.push(self.push(Inst::Jump(0))?);
            let next = self.pc();
            self.patch(split, Inst::Split(split + 1, next));
        }

        let end = self.pc();
        for jump in exits {
            self.patch(jump, Inst::Jump(end));
        }
        Ok(())
    }

    fn c_closure(
        &mut self,
        child: &Ast,
        min: u32,
        max: Option<u32>,
    ) -> RegezResult<()> {
        let limit = self.options.limits().max_repetition();
        let bound = max.unwrap_or(min);
        if bound > limit {
            return Err(RegezError::limit(
                Limit::Repetition,
                bound as usize,
                limit as usize,
            ));
        }
        if max == Some(0) || self.emits_nothing(child) {
            return Ok(());
        }

        match max {
            // x*
            None if min == 0 => {
                let split = self.push(Inst::Split(0, 0))?;
                self.c(child)?;
                self.push(Inst::Jump(split))?;
                let end = self.pc();
                self.patch(split, Inst::Split(split + 1, end));
            }
            // x{n,}: the last mandatory copy doubles as the loop body.
            None => {
                for _ in 1..min {
                    self.c(child)?;
                }
                let body = self.pc();
                self.c(child)?;
                let split = self.pc();
                self.push(Inst::Split(body, split + 1))?;
            }
            // x{n,m}: optional copies all exit to one continuation.
            Some(max) => {
                for _ in 0..min {
                    self.c(child)?;
                }
                let mut holes = Vec::with_capacity((max - min) as usize);
                for _ in min..max {
                    holes.push(self.push(Inst::Split(0, 0))?);
                    self.c(child)?;
                }
                let end = self.pc();
                for split in holes {
                    self.patch(split, Inst::Split(split + 1, end));
                }
            }
        }
        Ok(())
    }

    /// Would `ast` compile to no instructions?
    fn emits_nothing(
        &self,
        ast: &Ast,
    ) -> bool {
        match ast {
            Ast::Empty => true,
            Ast::Literal(_) | Ast::Anchor(_) | Ast::Alternate(_) => false,
            Ast::Concat(items) => items.iter().all(|item| self.emits_nothing(item)),
            Ast::Group { child, capture } => {
                (capture.is_none() || self.options.no_capture()) && self.emits_nothing(child)
            }
            Ast::Closure { child, max, .. } => *max == Some(0) || self.emits_nothing(child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::errors::CompileError;
    use crate::options::CompileLimits;
    use crate::syntax::{AnchorKind, parse};

    fn program(
        pattern: &str,
        options: &RegexOptions,
    ) -> RegezResult<Program> {
        compile(&parse(pattern, options)?, options)
    }

    fn insts(pattern: &str) -> Vec<Inst> {
        program(pattern, &RegexOptions::default())
            .unwrap()
            .insts()
            .to_vec()
    }

    #[test]
    fn test_literal_and_class() {
        use Inst::*;
        assert_eq!(
            insts("a[bc]"),
            vec![Save(0), Byte(b'a'), Class(ClassId(0)), Save(1), Match]
        );

        let program = program("[bc]x[bc]", &RegexOptions::default()).unwrap();
        assert_eq!(program.classes().len(), 1);
        assert_eq!(program.insts()[1], Class(ClassId(0)));
        assert_eq!(program.insts()[3], Class(ClassId(0)));
    }

    #[test]
    fn test_alternate_priority() {
        use Inst::*;
        assert_eq!(
            insts("a|b|c"),
            vec![
                Save(0),
                Split(2, 4),
                Byte(b'a'),
                Jump(8),
                Split(5, 7),
                Byte(b'b'),
                Jump(8),
                Byte(b'c'),
                Save(1),
                Match,
            ]
        );
    }

    #[test]
    fn test_closures() {
        use Inst::*;
        assert_eq!(
            insts("a*"),
            vec![Save(0), Split(2, 4), Byte(b'a'), Jump(1), Save(1), Match]
        );
        assert_eq!(
            insts("a+"),
            vec![Save(0), Byte(b'a'), Split(1, 3), Save(1), Match]
        );
        assert_eq!(
            insts("a?"),
            vec![Save(0), Split(2, 3), Byte(b'a'), Save(1), Match]
        );
        assert_eq!(
            insts("a{2,4}"),
            vec![
                Save(0),
                Byte(b'a'),
                Byte(b'a'),
                Split(4, 7),
                Byte(b'a'),
                Split(6, 7),
                Byte(b'a'),
                Save(1),
                Match,
            ]
        );
        assert_eq!(
            insts("a{3,}"),
            vec![Save(0), Byte(b'a'), Byte(b'a'), Byte(b'a'), Split(3, 5), Save(1), Match]
        );
        assert_eq!(insts("a{0}"), vec![Save(0), Save(1), Match]);
    }

    #[test]
    fn test_groups_and_slots() {
        use Inst::*;
        let options = RegexOptions::default();
        let program = program("(a)(b)", &options).unwrap();
        assert_eq!(
            program.insts(),
            &[
                Save(0),
                Save(2),
                Byte(b'a'),
                Save(3),
                Save(4),
                Byte(b'b'),
                Save(5),
                Save(1),
                Match
            ]
        );
        assert_eq!(program.slot_count(), 6);
        assert_eq!(program.group_count(), 3);

        let options = options.with_no_capture(true);
        let program = self::program("(a)(b)", &options).unwrap();
        assert_eq!(
            program.insts(),
            &[Save(0), Byte(b'a'), Byte(b'b'), Save(1), Match]
        );
        assert_eq!(program.slot_count(), 2);
    }

    #[test]
    fn test_anchors() {
        use Inst::*;
        assert_eq!(
            insts("^a$"),
            vec![
                Save(0),
                Assert(AnchorKind::Start),
                Byte(b'a'),
                Assert(AnchorKind::End),
                Save(1),
                Match
            ]
        );

        let options = RegexOptions::default();
        assert!(program("^a|^b", &options).unwrap().is_anchored_start());
        assert!(!program("^a|b", &options).unwrap().is_anchored_start());
        assert!(
            !program("^a", &options.with_multiline(true))
                .unwrap()
                .is_anchored_start()
        );
    }

    #[test]
    fn test_limits() {
        let options = RegexOptions::default();
        assert_eq!(
            program("a{0,100000}", &options),
            Err(RegezError::limit(Limit::Repetition, 100000, 1000))
        );
        assert_eq!(
            program("a{1001}", &options),
            Err(RegezError::limit(Limit::Repetition, 1001, 1000))
        );
        assert!(program("a{1000}", &options).is_ok());

        let err = program("(a{1000}){1000}", &options).unwrap_err();
        assert!(matches!(
            err,
            RegezError::Compile(CompileError::LimitExceeded {
                limit: Limit::ProgramSize,
                ..
            })
        ));

        let options = options.with_limits(CompileLimits::default().with_max_program_len(5));
        assert_eq!(program("ab", &options).map(|p| p.len()), Ok(5));
        assert_eq!(
            program("abc", &options),
            Err(RegezError::limit(Limit::ProgramSize, 6, 5))
        );
    }

    #[test]
    fn test_slot_table_limit() {
        let options = RegexOptions::default();
        let many_groups = "(a)".repeat(1000);
        // 3 instructions per group plus Save, Save, Match; 2 slots per group plus 2.
        assert_eq!(
            program(&many_groups, &options),
            Err(RegezError::limit(Limit::SlotTable, 3003 * 2002, 1 << 20))
        );
        assert!(program(&many_groups, &options.with_no_capture(true)).is_ok());

        // "(a)(b)": 9 instructions, 6 slots.
        let options = options.with_limits(CompileLimits::default().with_max_slot_table(54));
        assert!(program("(a)(b)", &options).is_ok());
        assert_eq!(
            program("(a)(b)c", &options),
            Err(RegezError::limit(Limit::SlotTable, 60, 54))
        );
    }

    #[test]
    fn test_empty_repetition_is_elided() {
        use Inst::*;
        let options = RegexOptions::default().with_no_capture(true);
        let program = program("((){1000}){1000}", &options).unwrap();
        assert_eq!(program.insts(), &[Save(0), Save(1), Match]);
    }

    #[test]
    fn test_deterministic() {
        let options = RegexOptions::default();
        for pattern in ["(a|b)*c{2,3}[x-z]+", "^(foo|bar)?$", "[[:alpha:]]+|[0-9]{1,4}"] {
            assert_eq!(
                program(pattern, &options).unwrap(),
                program(pattern, &options).unwrap()
            );
        }
    }
}
