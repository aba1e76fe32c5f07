//! # Pattern Parser
//!
//! Recursive descent over the pattern text, producing an [`Ast`].
//!
//! Precedence, tightest first: closure, concatenation, alternation.
//! Both the extended (ERE) and basic (BRE) dialects are handled here; they
//! differ only in which spellings are operators, which is decided by
//! [`Parser::peek_token`].

use core::str::FromStr;

use crate::alloc::format;
use crate::alloc::string::ToString;
use crate::alloc::vec::Vec;
use crate::errors::{Limit, RegezError, RegezResult, SyntaxErrorKind};
use crate::options::RegexOptions;
use crate::syntax::{AnchorKind, Ast, ByteSet, NamedClass};

/// Parse `pattern` under `options`.
///
/// ## Arguments
/// * `pattern` - the pattern text.
/// * `options` - syntax dialect, folding and nesting limits.
///
/// ## Returns
/// The [`Ast`], or the first syntax error; no partial tree is returned.
pub fn parse(
    pattern: &str,
    options: &RegexOptions,
) -> RegezResult<Ast> {
    Parser::new(pattern, options).parse()
}

/// Lexical classes, after dialect resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Pipe,
    Star,
    Plus,
    Question,
    Brace,
    Dot,
    Caret,
    Dollar,
    Bracket,
    Escape(char),
    Char(char),
}

/// A parsed node and its nesting height.
///
/// Height counts the groups and closures on the deepest path of the node.
type Parsed = (Ast, u32);

struct Parser<'p> {
    pattern: &'p str,
    options: &'p RegexOptions,
    pos: usize,
    depth: u32,
    captures: u32,
}

impl<'p> Parser<'p> {
    fn new(
        pattern: &'p str,
        options: &'p RegexOptions,
    ) -> Self {
        Self {
            pattern,
            options,
            pos: 0,
            depth: 0,
            captures: 0,
        }
    }

    fn parse(mut self) -> RegezResult<Ast> {
        let (ast, _) = self.parse_alternation()?;
        if let Some((Token::Close, _)) = self.peek_token()? {
            return Err(RegezError::syntax(self.pos, SyntaxErrorKind::UnopenedGroup));
        }
        debug_assert_eq!(self.pos, self.pattern.len());
        Ok(ast)
    }

    fn rest(&self) -> &'p str {
        &self.pattern[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char_at(
        &self,
        n: usize,
    ) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Classify the next token without consuming it.
    ///
    /// Returns the token and its length in bytes.
    fn peek_token(&self) -> RegezResult<Option<(Token, usize)>> {
        let mut chars = self.rest().chars();
        let Some(c) = chars.next() else {
            return Ok(None);
        };

        if c == '\\' {
            let Some(e) = chars.next() else {
                return Err(RegezError::syntax(
                    self.pos,
                    SyntaxErrorKind::TrailingBackslash,
                ));
            };
            let len = 1 + e.len_utf8();
            let token = if self.options.extended() {
                Token::Escape(e)
            } else {
                match e {
                    '(' => Token::Open,
                    ')' => Token::Close,
                    '|' => Token::Pipe,
                    '+' => Token::Plus,
                    '?' => Token::Question,
                    '{' => Token::Brace,
                    _ => Token::Escape(e),
                }
            };
            return Ok(Some((token, len)));
        }

        let token = match c {
            '*' => Token::Star,
            '.' => Token::Dot,
            '^' => Token::Caret,
            '$' => Token::Dollar,
            '[' => Token::Bracket,
            _ if !self.options.extended() => Token::Char(c),
            '(' => Token::Open,
            ')' => Token::Close,
            '|' => Token::Pipe,
            '+' => Token::Plus,
            '?' => Token::Question,
            '{' if chars.next().is_some_and(|d| d.is_ascii_digit()) => Token::Brace,
            _ => Token::Char(c),
        };
        Ok(Some((token, c.len_utf8())))
    }

    /// Fail with `Limit::Nesting` if `height` is past the nest limit.
    fn check_height(
        &self,
        height: u32,
    ) -> RegezResult<()> {
        let nest_limit = self.options.limits().nest_limit();
        if height > nest_limit {
            return Err(RegezError::limit(
                Limit::Nesting,
                height as usize,
                nest_limit as usize,
            ));
        }
        Ok(())
    }

    fn parse_alternation(&mut self) -> RegezResult<Parsed> {
        let mut branches = Vec::new();
        let mut height = 0;
        let mut last_pipe: Option<usize> = None;
        loop {
            let start = self.pos;
            let (branch, branch_height) = self.parse_concat()?;
            height = height.max(branch_height);
            let empty = self.pos == start;

            match self.peek_token()? {
                Some((Token::Pipe, len)) => {
                    if empty {
                        return Err(RegezError::syntax(
                            self.pos,
                            SyntaxErrorKind::EmptyAlternative,
                        ));
                    }
                    last_pipe = Some(self.pos);
                    self.pos += len;
                    branches.push(branch);
                }
                _ => {
                    if let (true, Some(pipe)) = (empty, last_pipe) {
                        return Err(RegezError::syntax(pipe, SyntaxErrorKind::EmptyAlternative));
                    }
                    branches.push(branch);
                    return Ok((Ast::alternate(branches), height));
                }
            }
        }
    }

    fn parse_concat(&mut self) -> RegezResult<Parsed> {
        let mut items = Vec::new();
        let mut height = 0;
        let mut at_start = true;
        while let Some((token, _)) = self.peek_token()? {
            if matches!(token, Token::Pipe | Token::Close) {
                break;
            }
            let (item, item_height) = self.parse_repeat(at_start)?;
            height = height.max(item_height);
            // BRE: a `*` right after a leading `^` is still literal.
            at_start = !self.options.extended() && item == Ast::Anchor(AnchorKind::Start);
            items.push(item);
        }
        Ok((Ast::concat(items), height))
    }

    fn parse_repeat(
        &mut self,
        at_start: bool,
    ) -> RegezResult<Parsed> {
        let (mut atom, mut height) = self.parse_atom(at_start)?;
        if !self.options.extended() && atom == Ast::Anchor(AnchorKind::Start) {
            return Ok((atom, height));
        }

        while let Some((token, len)) = self.peek_token()? {
            let (min, max) = match token {
                Token::Star => (0, None),
                Token::Plus => (1, None),
                Token::Question => (0, Some(1)),
                Token::Brace => {
                    let start = self.pos;
                    self.pos += len;
                    self.parse_bound(start)?
                }
                _ => break,
            };
            if token != Token::Brace {
                self.pos += len;
            }
            // Stacked closures nest like groups.
            height += 1;
            self.check_height(height)?;
            atom = Ast::closure(atom, min, max);
        }
        Ok((atom, height))
    }

    /// Parse the body of `{m}`, `{m,}` or `{m,n}`; the brace is consumed.
    fn parse_bound(
        &mut self,
        start: usize,
    ) -> RegezResult<(u32, Option<u32>)> {
        let unclosed = || RegezError::syntax(start, SyntaxErrorKind::UnclosedRepetition);

        let min = self.parse_decimal().ok_or_else(unclosed)?;
        let max = if self.peek_char() == Some(',') {
            self.bump_char();
            self.parse_decimal()
        } else {
            Some(min)
        };

        let close = if self.options.extended() { "}" } else { "\\}" };
        if !self.rest().starts_with(close) {
            return Err(unclosed());
        }
        self.pos += close.len();

        if let Some(max) = max
            && min > max
        {
            return Err(RegezError::syntax(
                start,
                SyntaxErrorKind::InvalidRepetition { min, max },
            ));
        }
        Ok((min, max))
    }

    /// Parse a run of decimal digits, saturating at `u32::MAX`.
    fn parse_decimal(&mut self) -> Option<u32> {
        let digits = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }
        let value = self.rest()[..digits].bytes().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
        self.pos += digits;
        Some(value)
    }

    fn parse_atom(
        &mut self,
        at_start: bool,
    ) -> RegezResult<Parsed> {
        let start = self.pos;
        let Some((token, len)) = self.peek_token()? else {
            return Ok((Ast::Empty, 0));
        };
        self.pos += len;

        let atom = match token {
            Token::Open => return self.parse_group(start),
            Token::Star if !self.options.extended() && at_start => Ok(self.literal('*')),
            Token::Star | Token::Plus | Token::Question | Token::Brace => Err(RegezError::syntax(
                start,
                SyntaxErrorKind::MissingRepetitionOperand,
            )),
            Token::Dot => {
                let mut set = ByteSet::FULL;
                if self.options.multiline() {
                    set.remove(b'\n');
                }
                Ok(Ast::Literal(set))
            }
            Token::Caret if self.options.extended() || at_start => {
                Ok(Ast::Anchor(AnchorKind::Start))
            }
            Token::Caret => Ok(self.literal('^')),
            Token::Dollar if self.options.extended() || self.at_expression_end()? => {
                Ok(Ast::Anchor(AnchorKind::End))
            }
            Token::Dollar => Ok(self.literal('$')),
            Token::Bracket => self.parse_bracket(start),
            Token::Escape(c) => self.parse_escape(start, c),
            Token::Char(c) => Ok(self.literal(c)),
            Token::Close | Token::Pipe => {
                unreachable!("concatenation stops before {token:?}")
            }
        };
        atom.map(|ast| (ast, 0))
    }

    fn at_expression_end(&self) -> RegezResult<bool> {
        Ok(matches!(
            self.peek_token()?,
            None | Some((Token::Close, _)) | Some((Token::Pipe, _))
        ))
    }

    fn parse_group(
        &mut self,
        start: usize,
    ) -> RegezResult<Parsed> {
        self.depth += 1;
        self.check_height(self.depth)?;

        self.captures += 1;
        let capture = self.captures;

        let (child, height) = self.parse_alternation()?;
        match self.peek_token()? {
            Some((Token::Close, len)) => self.pos += len,
            _ => return Err(RegezError::syntax(start, SyntaxErrorKind::UnclosedGroup)),
        }

        self.depth -= 1;
        let height = height + 1;
        self.check_height(height)?;
        Ok((Ast::group(child, Some(capture)), height))
    }

    fn parse_escape(
        &mut self,
        start: usize,
        c: char,
    ) -> RegezResult<Ast> {
        let negated_class = |mut set: ByteSet, multiline: bool| {
            set.negate();
            if multiline {
                set.remove(b'\n');
            }
            Ast::Literal(set)
        };
        let multiline = self.options.multiline();

        Ok(match c {
            'd' => Ast::Literal(ByteSet::named(NamedClass::Digit)),
            'D' => negated_class(ByteSet::named(NamedClass::Digit), multiline),
            'w' => Ast::Literal(ByteSet::word()),
            'W' => negated_class(ByteSet::word(), multiline),
            's' => Ast::Literal(ByteSet::named(NamedClass::Space)),
            'S' => negated_class(ByteSet::named(NamedClass::Space), multiline),
            'b' => Ast::Anchor(AnchorKind::WordBoundary),
            'B' => Ast::Anchor(AnchorKind::NotWordBoundary),
            '<' => Ast::Anchor(AnchorKind::WordStart),
            '>' => Ast::Anchor(AnchorKind::WordEnd),
            'n' => self.literal('\n'),
            't' => self.literal('\t'),
            'r' => self.literal('\r'),
            'f' => self.literal('\x0C'),
            'v' => self.literal('\x0B'),
            '1'..='9' => {
                return Err(RegezError::unsupported(
                    start,
                    format!("backreference \\{c}"),
                ));
            }
            _ => self.literal(c),
        })
    }

    /// A literal character; non-ASCII characters become a byte sequence.
    fn literal(
        &self,
        c: char,
    ) -> Ast {
        if c.is_ascii() {
            let mut set = ByteSet::singleton(c as u8);
            if self.options.case_insensitive() {
                set.case_fold();
            }
            return Ast::Literal(set);
        }

        let mut buf = [0u8; 4];
        Ast::concat(
            c.encode_utf8(&mut buf)
                .bytes()
                .map(|b| Ast::Literal(ByteSet::singleton(b)))
                .collect(),
        )
    }

    /// Parse a bracket expression; the `[` is consumed.
    fn parse_bracket(
        &mut self,
        start: usize,
    ) -> RegezResult<Ast> {
        let unclosed = || RegezError::syntax(start, SyntaxErrorKind::UnclosedBracket);

        let mut set = ByteSet::EMPTY;
        let negated = self.peek_char() == Some('^');
        if negated {
            self.bump_char();
        }

        let mut first = true;
        loop {
            let item_pos = self.pos;
            let c = self.bump_char().ok_or_else(unclosed)?;
            if c == ']' && !first {
                break;
            }
            first = false;

            let lo = match (c, self.peek_char()) {
                ('[', Some(':')) => {
                    self.bump_char();
                    let name = self.take_until(":]").ok_or_else(unclosed)?;
                    let class = NamedClass::from_str(name).map_err(|_| {
                        RegezError::syntax(
                            item_pos,
                            SyntaxErrorKind::UnknownClassName(name.to_string()),
                        )
                    })?;
                    set.union(&ByteSet::named(class));
                    continue;
                }
                ('[', Some(delim @ ('.' | '='))) => {
                    self.bump_char();
                    self.parse_collating_element(item_pos, delim)?
                }
                _ => c,
            };

            let is_range = self.peek_char() == Some('-')
                && self.peek_char_at(1).is_some_and(|n| n != ']');
            let hi = if is_range {
                self.bump_char();
                let end_pos = self.pos;
                match self.bump_char().ok_or_else(unclosed)? {
                    '[' if matches!(self.peek_char(), Some('.' | '=')) => {
                        let delim = self.bump_char().unwrap_or('.');
                        self.parse_collating_element(end_pos, delim)?
                    }
                    hi => hi,
                }
            } else {
                lo
            };

            for ch in [lo, hi] {
                if !ch.is_ascii() {
                    return Err(RegezError::unsupported(
                        item_pos,
                        format!("non-ASCII character {ch:?} in bracket expression"),
                    ));
                }
            }
            if hi < lo {
                return Err(RegezError::syntax(
                    item_pos,
                    SyntaxErrorKind::InvalidRange { start: lo, end: hi },
                ));
            }
            set.insert_range(lo as u8, hi as u8);
        }

        if self.options.case_insensitive() {
            set.case_fold();
        }
        if negated {
            set.negate();
            if self.options.multiline() {
                set.remove(b'\n');
            }
        }
        Ok(Ast::Literal(set))
    }

    /// Parse `[.x.]` or `[=x=]` after the opening `[.` / `[=`.
    fn parse_collating_element(
        &mut self,
        item_pos: usize,
        delim: char,
    ) -> RegezResult<char> {
        let close = if delim == '.' { ".]" } else { "=]" };
        let body = self.take_until(close).ok_or_else(|| {
            RegezError::syntax(item_pos, SyntaxErrorKind::UnclosedBracket)
        })?;

        let mut chars = body.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(RegezError::unsupported(
                item_pos,
                format!("collating element [{delim}{body}{delim}]"),
            )),
        }
    }

    /// Consume up to and including `terminator`, returning the text before it.
    fn take_until(
        &mut self,
        terminator: &str,
    ) -> Option<&'p str> {
        let rest = self.rest();
        let idx = rest.find(terminator)?;
        self.pos += idx + terminator.len();
        Some(&rest[..idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::boxed::Box;
    use crate::alloc::vec;
    use crate::errors::CompileError;

    fn ere(pattern: &str) -> RegezResult<Ast> {
        parse(pattern, &RegexOptions::default())
    }

    fn bre(pattern: &str) -> RegezResult<Ast> {
        parse(pattern, &RegexOptions::default().with_extended(false))
    }

    fn lit(byte: u8) -> Ast {
        Ast::Literal(ByteSet::singleton(byte))
    }

    fn syntax_err(result: RegezResult<Ast>) -> (usize, SyntaxErrorKind) {
        match result {
            Err(RegezError::Syntax { position, reason }) => (position, reason),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            ere("ab*|c").unwrap(),
            Ast::Alternate(vec![
                Ast::Concat(vec![lit(b'a'), Ast::closure(lit(b'b'), 0, None)]),
                lit(b'c'),
            ])
        );

        assert_eq!(
            ere("(ab)+").unwrap(),
            Ast::closure(
                Ast::group(Ast::Concat(vec![lit(b'a'), lit(b'b')]), Some(1)),
                1,
                None
            )
        );
    }

    #[test]
    fn test_capture_indices() {
        let ast = ere("((a)(b))(c)").unwrap();
        let Ast::Concat(items) = ast else {
            panic!("expected concat");
        };
        let Ast::Group { child, capture } = &items[0] else {
            panic!("expected group");
        };
        assert_eq!(*capture, Some(1));
        assert_eq!(
            **child,
            Ast::Concat(vec![
                Ast::group(lit(b'a'), Some(2)),
                Ast::group(lit(b'b'), Some(3)),
            ])
        );
        assert_eq!(items[1], Ast::group(lit(b'c'), Some(4)));
    }

    #[test]
    fn test_repetition_bounds() {
        assert_eq!(ere("a{2,4}").unwrap(), Ast::closure(lit(b'a'), 2, Some(4)));
        assert_eq!(ere("a{3}").unwrap(), Ast::closure(lit(b'a'), 3, Some(3)));
        assert_eq!(ere("a{3,}").unwrap(), Ast::closure(lit(b'a'), 3, None));
        assert_eq!(ere("a?").unwrap(), Ast::closure(lit(b'a'), 0, Some(1)));
        assert_eq!(
            ere("a**").unwrap(),
            Ast::closure(Ast::closure(lit(b'a'), 0, None), 0, None)
        );
        assert_eq!(
            ere("a{99999999999}").unwrap(),
            Ast::closure(lit(b'a'), u32::MAX, Some(u32::MAX))
        );

        // Not a bound: literal brace.
        assert_eq!(ere("{").unwrap(), lit(b'{'));
        assert_eq!(
            ere("a{x}").unwrap(),
            Ast::Concat(vec![lit(b'a'), lit(b'{'), lit(b'x'), lit(b'}')])
        );

        assert_eq!(
            syntax_err(ere("a{4,2}")),
            (1, SyntaxErrorKind::InvalidRepetition { min: 4, max: 2 })
        );
        assert_eq!(
            syntax_err(ere("a{2,")),
            (1, SyntaxErrorKind::UnclosedRepetition)
        );
        assert_eq!(
            syntax_err(ere("a{2x}")),
            (1, SyntaxErrorKind::UnclosedRepetition)
        );
    }

    #[test]
    fn test_group_errors() {
        assert_eq!(syntax_err(ere("(a|b")), (0, SyntaxErrorKind::UnclosedGroup));
        assert_eq!(syntax_err(ere("x((a)")), (1, SyntaxErrorKind::UnclosedGroup));
        assert_eq!(syntax_err(ere("a)")), (1, SyntaxErrorKind::UnopenedGroup));
        assert_eq!(ere("()").unwrap(), Ast::group(Ast::Empty, Some(1)));
        assert_eq!(ere("").unwrap(), Ast::Empty);
    }

    #[test]
    fn test_dangling_operators() {
        assert_eq!(
            syntax_err(ere("*a")),
            (0, SyntaxErrorKind::MissingRepetitionOperand)
        );
        assert_eq!(
            syntax_err(ere("a|+")),
            (2, SyntaxErrorKind::MissingRepetitionOperand)
        );
        assert_eq!(
            syntax_err(ere("(?a)")),
            (1, SyntaxErrorKind::MissingRepetitionOperand)
        );
        assert_eq!(
            syntax_err(ere("{2}")),
            (0, SyntaxErrorKind::MissingRepetitionOperand)
        );
        assert_eq!(syntax_err(ere("a|")), (1, SyntaxErrorKind::EmptyAlternative));
        assert_eq!(syntax_err(ere("|a")), (0, SyntaxErrorKind::EmptyAlternative));
        assert_eq!(syntax_err(ere("a||b")), (2, SyntaxErrorKind::EmptyAlternative));
        assert_eq!(syntax_err(ere("(a|)")), (2, SyntaxErrorKind::EmptyAlternative));
        assert_eq!(syntax_err(ere("ab\\")), (2, SyntaxErrorKind::TrailingBackslash));
    }

    #[test]
    fn test_brackets() {
        let mut abc = ByteSet::range(b'a', b'c');
        assert_eq!(ere("[a-c]").unwrap(), Ast::Literal(abc));

        abc.insert(b']');
        assert_eq!(ere("[]a-c]").unwrap(), Ast::Literal(abc));

        let mut dash = ByteSet::singleton(b'a');
        dash.insert(b'-');
        assert_eq!(ere("[a-]").unwrap(), Ast::Literal(dash));
        assert_eq!(ere("[-a]").unwrap(), Ast::Literal(dash));

        let mut negated = ByteSet::singleton(b'x');
        negated.negate();
        assert_eq!(ere("[^x]").unwrap(), Ast::Literal(negated));

        assert_eq!(
            ere("[[:digit:]]").unwrap(),
            Ast::Literal(ByteSet::named(NamedClass::Digit))
        );
        assert_eq!(ere("[[.-.]]").unwrap(), lit(b'-'));
        assert_eq!(ere("[[=e=]]").unwrap(), lit(b'e'));
        assert_eq!(ere("[\\]").unwrap(), lit(b'\\'));

        assert_eq!(syntax_err(ere("a[bc")), (1, SyntaxErrorKind::UnclosedBracket));
        assert_eq!(syntax_err(ere("[]")), (0, SyntaxErrorKind::UnclosedBracket));
        assert_eq!(
            syntax_err(ere("[z-a]")),
            (1, SyntaxErrorKind::InvalidRange { start: 'z', end: 'a' })
        );
        assert_eq!(
            syntax_err(ere("[[:word:]]")),
            (1, SyntaxErrorKind::UnknownClassName("word".to_string()))
        );

        assert!(matches!(
            ere("[é]"),
            Err(RegezError::Compile(CompileError::UnsupportedConstruct { position: 1, .. }))
        ));
        assert!(matches!(
            ere("[[.ch.]]"),
            Err(RegezError::Compile(CompileError::UnsupportedConstruct { .. }))
        ));
    }

    #[test]
    fn test_case_insensitive() {
        let options = RegexOptions::default().with_case_insensitive(true);

        let mut set = ByteSet::singleton(b'q');
        set.insert(b'Q');
        assert_eq!(parse("Q", &options).unwrap(), Ast::Literal(set));

        // Folding happens before negation.
        let mut set = ByteSet::range(b'a', b'z');
        set.insert_range(b'A', b'Z');
        set.negate();
        assert_eq!(parse("[^a-z]", &options).unwrap(), Ast::Literal(set));
    }

    #[test]
    fn test_multiline_dot() {
        let options = RegexOptions::default().with_multiline(true);
        let Ast::Literal(set) = parse(".", &options).unwrap() else {
            panic!("expected literal");
        };
        assert!(!set.contains(b'\n'));
        assert_eq!(set.len(), 255);

        let Ast::Literal(set) = ere(".").unwrap() else {
            panic!("expected literal");
        };
        assert_eq!(set, ByteSet::FULL);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(ere("\\.").unwrap(), lit(b'.'));
        assert_eq!(ere("\\n").unwrap(), lit(b'\n'));
        assert_eq!(
            ere("\\d").unwrap(),
            Ast::Literal(ByteSet::named(NamedClass::Digit))
        );
        assert_eq!(ere("\\b").unwrap(), Ast::Anchor(AnchorKind::WordBoundary));
        assert_eq!(ere("\\<").unwrap(), Ast::Anchor(AnchorKind::WordStart));
        assert!(matches!(
            ere("(a)\\1"),
            Err(RegezError::Compile(CompileError::UnsupportedConstruct { position: 3, .. }))
        ));
    }

    #[test]
    fn test_non_ascii_literal() {
        // "é" is 0xC3 0xA9; the closure repeats the whole character.
        assert_eq!(
            ere("é+").unwrap(),
            Ast::Closure {
                child: Box::new(Ast::Concat(vec![lit(0xC3), lit(0xA9)])),
                min: 1,
                max: None,
            }
        );
    }

    #[test]
    fn test_nest_limit() {
        let options = RegexOptions::default()
            .with_limits(crate::options::CompileLimits::default().with_nest_limit(3));
        assert!(parse("(((a)))", &options).is_ok());
        assert_eq!(
            parse("((((a))))", &options),
            Err(RegezError::limit(Limit::Nesting, 4, 3))
        );
    }

    #[test]
    fn test_stacked_closure_limit() {
        let options = RegexOptions::default()
            .with_limits(crate::options::CompileLimits::default().with_nest_limit(3));
        assert!(parse("a***", &options).is_ok());
        assert!(parse("(a+)?", &options).is_ok());
        assert_eq!(
            parse("a****", &options),
            Err(RegezError::limit(Limit::Nesting, 4, 3))
        );
        assert_eq!(
            parse("((a+)?)", &options),
            Err(RegezError::limit(Limit::Nesting, 4, 3))
        );

        let stars = format!("a{}", "*".repeat(10_000));
        assert_eq!(
            ere(&stars),
            Err(RegezError::limit(Limit::Nesting, 251, 250))
        );
        let bounds = format!("a{}", "{1}".repeat(10_000));
        assert_eq!(
            ere(&bounds),
            Err(RegezError::limit(Limit::Nesting, 251, 250))
        );
        assert_eq!(
            bre(&format!("a{}", "\\{1\\}".repeat(10_000))),
            Err(RegezError::limit(Limit::Nesting, 251, 250))
        );
    }

    #[test]
    fn test_basic_syntax() {
        assert_eq!(
            bre("\\(a\\)\\{2\\}").unwrap(),
            Ast::closure(Ast::group(lit(b'a'), Some(1)), 2, Some(2))
        );
        assert_eq!(
            bre("(a)+").unwrap(),
            Ast::Concat(vec![lit(b'('), lit(b'a'), lit(b')'), lit(b'+')])
        );
        assert_eq!(
            bre("a\\|b").unwrap(),
            Ast::Alternate(vec![lit(b'a'), lit(b'b')])
        );

        // Leading `*` is literal, as is one following a leading `^`.
        assert_eq!(
            bre("*a").unwrap(),
            Ast::Concat(vec![lit(b'*'), lit(b'a')])
        );
        assert_eq!(
            bre("^*").unwrap(),
            Ast::Concat(vec![Ast::Anchor(AnchorKind::Start), lit(b'*')])
        );

        // `^` and `$` anchor only at the ends of an expression.
        assert_eq!(
            bre("a^b$").unwrap(),
            Ast::Concat(vec![
                lit(b'a'),
                lit(b'^'),
                lit(b'b'),
                Ast::Anchor(AnchorKind::End)
            ])
        );
        assert_eq!(
            bre("a$b").unwrap(),
            Ast::Concat(vec![lit(b'a'), lit(b'$'), lit(b'b')])
        );

        assert_eq!(
            syntax_err(bre("a\\{2")),
            (1, SyntaxErrorKind::UnclosedRepetition)
        );
        assert_eq!(syntax_err(bre("\\(a")), (0, SyntaxErrorKind::UnclosedGroup));
    }
}
