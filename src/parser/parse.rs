//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct: the scan cursor, the terminal
//! matchers, the rule-entry bookkeeping and the top-level entry points.
//!
//! # Parser Architecture
//!
//! The recognizer is a backtracking recursive descent over characters, not
//! tokens. Every grammar rule is a method returning `Ok(true)` when it matched
//! and `Ok(false)` when it did not; a failing rule leaves the cursor where it
//! found it. Rule methods are split across files using `impl Parser` blocks:
//!
//! - `statements`: `programa`, `declaracion` and its three alternatives, and
//!   the string literal rules used by `impresion`
//! - `expressions`: `expresion`, `expresionAritmetica`, `operador` and the
//!   leaf rules for variables and constants
//!
//! # Fatal conditions
//!
//! [`ParseError`] is reserved for conditions that abort the whole parse:
//! exhausting the invocation budget, exceeding the nesting limit, or a rule
//! being re-entered at the same position without consuming input. Ordinary
//! syntax failure is never an error.

use crate::parser::config::{ParserConfig, WhitespaceMode};
use crate::parser::grammar::Rule;
use crate::parser::patterns;
use thiserror::Error;
use tracing::{debug, trace};

/// Fatal recognizer condition. Positions are character offsets into the
/// original source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("rule <{rule}> re-entered at position {position} without consuming input")]
    LeftRecursion { rule: Rule, position: usize },

    #[error("recognizer exceeded its budget of {limit} rule invocations at position {position}")]
    InvocationBudgetExceeded { limit: usize, position: usize },

    #[error("nesting exceeded {limit} active rules at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Result of a parse that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOutcome {
    pub matched: bool,
    /// Final cursor: just past the matched program, or 0 when nothing matched.
    pub cursor: usize,
    /// Highest offset the recognizer reached.
    pub furthest: usize,
    /// Rule invocations spent.
    pub invocations: usize,
}

impl ParseOutcome {
    /// Where syntax failed, if it did.
    pub fn failure_position(&self) -> Option<usize> {
        (!self.matched).then_some(self.furthest)
    }
}

/// An active rule on the call chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    rule: Rule,
    position: usize,
}

/// Backtracking recognizer over one source text.
pub struct Parser {
    pub(crate) input: Vec<char>,
    /// Source offset of each entry in `input`.
    offsets: Vec<usize>,
    pub(crate) position: usize,
    furthest: usize,
    invocations: usize,
    chain: Vec<Frame>,
    pub(crate) config: ParserConfig,
}

impl Parser {
    pub fn new(source: &str, config: ParserConfig) -> Self {
        let (input, offsets) = match config.whitespace {
            WhitespaceMode::Skip => {
                let input: Vec<char> = source.chars().collect();
                let offsets = (0..input.len()).collect();
                (input, offsets)
            }
            WhitespaceMode::Strip => source
                .chars()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .map(|(offset, c)| (c, offset))
                .unzip(),
        };

        Self {
            input,
            offsets,
            position: 0,
            furthest: 0,
            invocations: 0,
            chain: Vec::new(),
            config,
        }
    }

    /// Run the root rule `programa` from the start of the input.
    pub fn parse_program(&mut self) -> ParseResult<ParseOutcome> {
        self.position = 0;
        self.furthest = 0;
        self.invocations = 0;
        self.chain.clear();

        let matched = self.program()?;
        let outcome = ParseOutcome {
            matched,
            cursor: self.source_offset(self.position),
            furthest: self.source_offset(self.furthest),
            invocations: self.invocations,
        };

        debug!(
            matched = outcome.matched,
            cursor = outcome.cursor,
            furthest = outcome.furthest,
            invocations = outcome.invocations,
            "parse finished"
        );
        Ok(outcome)
    }

    // ===== Rule bookkeeping =====

    /// Run `body` as the recognizer for `rule`: check the resource bounds and
    /// the progress guard, then restore the cursor if `body` did not match.
    pub(crate) fn rule<F>(&mut self, rule: Rule, body: F) -> ParseResult<bool>
    where
        F: FnOnce(&mut Self) -> ParseResult<bool>,
    {
        self.enter(rule)?;
        let saved_pos = self.position;

        let result = body(self);
        self.chain.pop();
        let matched = result?;

        if !matched {
            self.position = saved_pos;
        }
        trace!(rule = rule.name(), from = saved_pos, to = self.position, matched, "exit");
        Ok(matched)
    }

    fn enter(&mut self, rule: Rule) -> ParseResult<()> {
        let position = self.position;

        self.invocations += 1;
        if self.invocations > self.config.invocation_budget {
            return Err(ParseError::InvocationBudgetExceeded {
                limit: self.config.invocation_budget,
                position: self.source_offset(position),
            });
        }

        if self.chain.len() >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                position: self.source_offset(position),
            });
        }

        // Entry positions never decrease along the chain, so only the
        // innermost frames at this position can repeat.
        let reentered = self
            .chain
            .iter()
            .rev()
            .take_while(|frame| frame.position == position)
            .any(|frame| frame.rule == rule);
        if reentered {
            return Err(ParseError::LeftRecursion {
                rule,
                position: self.source_offset(position),
            });
        }

        self.chain.push(Frame { rule, position });
        trace!(rule = rule.name(), position, depth = self.chain.len(), "enter");
        Ok(())
    }

    // ===== Terminals =====

    /// Match `text` exactly after any leading whitespace.
    pub(crate) fn literal(&mut self, text: &str) -> bool {
        let start = self.skip_whitespace(self.position);
        self.reach(start);

        if patterns::starts_with_at(&self.input, start, text) {
            self.position = start + text.chars().count();
            self.reach(self.position);
            true
        } else {
            false
        }
    }

    /// Match one character satisfying `accept`, without skipping whitespace.
    pub(crate) fn raw_char(&mut self, accept: impl Fn(char) -> bool) -> bool {
        self.reach(self.position);

        match self.input.get(self.position) {
            Some(&c) if accept(c) => {
                self.position += 1;
                self.reach(self.position);
                true
            }
            _ => false,
        }
    }

    /// Apply a pattern matcher after any leading whitespace.
    pub(crate) fn scan(&mut self, matcher: patterns::Matcher) -> bool {
        let start = self.skip_whitespace(self.position);
        self.reach(start);

        match matcher(&self.input, start) {
            Some(len) => {
                self.position = start + len;
                self.reach(self.position);
                true
            }
            None => false,
        }
    }

    /// Consume trailing whitespace and report whether the input is exhausted.
    pub(crate) fn end_of_input(&mut self) -> bool {
        let end = self.skip_whitespace(self.position);
        self.reach(end);

        if end == self.input.len() {
            self.position = end;
            true
        } else {
            false
        }
    }

    // ===== Helpers =====

    fn skip_whitespace(&self, from: usize) -> usize {
        from + self.input[from.min(self.input.len())..]
            .iter()
            .take_while(|c| c.is_whitespace())
            .count()
    }

    fn reach(&mut self, position: usize) {
        self.furthest = self.furthest.max(position);
    }

    /// Map a cursor position back to a character offset in the source.
    fn source_offset(&self, position: usize) -> usize {
        match self.offsets.get(position) {
            Some(&offset) => offset,
            None => self.offsets.last().map_or(0, |&last| last + 1),
        }
    }
}

/// Parse `source` with the default configuration.
pub fn accepts(source: &str) -> ParseResult<ParseOutcome> {
    accepts_with(source, &ParserConfig::default())
}

/// Parse `source` with an explicit configuration.
pub fn accepts_with(source: &str, config: &ParserConfig) -> ParseResult<ParseOutcome> {
    Parser::new(source, config.clone()).parse_program()
}
