//! # Introduction
//!
//! lexscope tokenizes programs written in a tiny assignment/conditional/print
//! language and checks them against its grammar with a backtracking
//! recursive-descent recognizer. Results can be printed as a text report or
//! browsed in a terminal inspector built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Symbol table
//!        ↘ Parser → Verdict
//! ```
//!
//! 1. [`parser`]: the pattern catalog, the lexer, the grammar description and
//!    the recognizer itself.
//! 2. [`symbols`]: the symbol table built from the token stream.
//! 3. [`analysis`]: runs everything over one source text.
//! 4. [`report`]: plain-text rendering of an analysis.
//! 5. [`cli`]: command-line options.
//! 6. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## The language
//!
//! ```text
//! if x > 5 { print "bfh"; } else { x := 0; }
//! ```
//!
//! A program is a single declaration: an assignment, a conditional, or a
//! `print` of a string literal over the alphabet `b f h j k`.

pub mod analysis;
pub mod cli;
pub mod parser;
pub mod report;
pub mod symbols;
pub mod ui;
