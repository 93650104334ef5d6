//! Lexer and syntax checker
//!
//! This module holds both passes over a source text:
//! - [`patterns`]: the catalog of lexical classes, one matcher per class
//! - [`lexer`]: tokenization (source text → classified tokens)
//! - [`parse`]: the backtracking recognizer (source text → accept/reject)
//! - [`grammar`]: the BNF productions the recognizer implements
//! - [`config`]: resource bounds and whitespace policy for the recognizer
//!
//! The two passes are independent: the recognizer reads characters directly
//! and never consumes the token stream.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with ordered choice and cursor
//! save/restore. No external parser generator dependencies.

pub mod config;
pub mod expressions;
pub mod grammar;
pub mod lexer;
pub mod parse;
pub mod patterns;
mod statements;

pub use config::{ParserConfig, WhitespaceMode};
pub use lexer::{tokenize, Lexer, ScanEvent, Span, Token, TokenClass};
pub use parse::{accepts, accepts_with, ParseError, ParseOutcome, Parser};
