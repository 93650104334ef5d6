//! One complete analysis of a source text
//!
//! Runs the lexer, the symbol table builder and the recognizer over the same
//! text and keeps the results together for the report and the inspector.

use crate::parser::config::ParserConfig;
use crate::parser::lexer::{Lexer, ScanEvent, Token, TokenClass};
use crate::parser::parse::{ParseError, ParseOutcome, Parser};
use crate::symbols::SymbolTable;
use tracing::debug;

/// The program shown when no file is given.
pub const DEMO_SOURCE: &str = include_str!("../../demos/default.lx");

/// Final judgement on a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { cursor: usize },
    SyntaxError { position: usize },
    Fatal(ParseError),
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub source: String,
    /// Every scan event, whitespace included.
    pub events: Vec<ScanEvent>,
    pub symbols: SymbolTable,
    pub parse: Result<ParseOutcome, ParseError>,
    pub config: ParserConfig,
}

impl Analysis {
    pub fn run(source: impl Into<String>, config: ParserConfig) -> Self {
        let source = source.into();

        let events: Vec<ScanEvent> = Lexer::new(&source).collect();
        let symbols = SymbolTable::build(events.iter().filter_map(ScanEvent::token));
        let parse = Parser::new(&source, config.clone()).parse_program();

        let analysis = Analysis {
            source,
            events,
            symbols,
            parse,
            config,
        };

        debug!(
            tokens = analysis.tokens().count(),
            unrecognized = analysis.unrecognized().count(),
            symbols = analysis.symbols.len(),
            verdict = ?analysis.verdict(),
            "analysis finished"
        );
        analysis
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.events.iter().filter_map(ScanEvent::token)
    }

    pub fn unrecognized(&self) -> impl Iterator<Item = &Token> {
        self.tokens()
            .filter(|token| token.class == TokenClass::Unrecognized)
    }

    pub fn verdict(&self) -> Verdict {
        match &self.parse {
            Ok(outcome) if outcome.matched => Verdict::Accepted {
                cursor: outcome.cursor,
            },
            Ok(outcome) => Verdict::SyntaxError {
                position: outcome.furthest,
            },
            Err(err) => Verdict::Fatal(err.clone()),
        }
    }

    /// Offset to mark in the source: where parsing stopped or failed.
    pub fn marker(&self) -> usize {
        match self.verdict() {
            Verdict::Accepted { cursor } => cursor,
            Verdict::SyntaxError { position } => position,
            Verdict::Fatal(
                ParseError::LeftRecursion { position, .. }
                | ParseError::InvocationBudgetExceeded { position, .. }
                | ParseError::NestingTooDeep { position, .. },
            ) => position,
        }
    }
}
