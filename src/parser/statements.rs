//! Declaration-level rules
//!
//! ```text
//! programa          ::= declaracion
//! declaracion       ::= asignacion | estructuraControl | impresion
//! asignacion        ::= variable ":=" expresion ";"
//! estructuraControl ::= "if" expresion "{" declaracion "}" "else" "{" declaracion "}"
//! impresion         ::= "print" cadenaCaracteres ";"
//! cadenaCaracteres  ::= "\"" caracteres "\""
//! caracteres        ::= caracter caracteres | ε
//! caracter          ::= "b" | "f" | "h" | "j" | "k"
//! ```
//!
//! All methods are `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::grammar::Rule;
use crate::parser::parse::{ParseResult, Parser};
use crate::parser::patterns::STRING_ALPHABET;

impl Parser {
    /// `programa`: a single declaration, optionally followed only by
    /// whitespace when the configuration requires full input.
    pub(crate) fn program(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Program, |p| {
            Ok(p.declaration()? && (!p.config.require_full_input || p.end_of_input()))
        })
    }

    pub(crate) fn declaration(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Declaration, |p| {
            Ok(p.assignment()? || p.control_structure()? || p.print_statement()?)
        })
    }

    pub(crate) fn assignment(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Assignment, |p| {
            Ok(p.variable()? && p.literal(":=") && p.expression()? && p.literal(";"))
        })
    }

    pub(crate) fn control_structure(&mut self) -> ParseResult<bool> {
        self.rule(Rule::ControlStructure, |p| {
            Ok(p.literal("if")
                && p.expression()?
                && p.literal("{")
                && p.declaration()?
                && p.literal("}")
                && p.literal("else")
                && p.literal("{")
                && p.declaration()?
                && p.literal("}"))
        })
    }

    pub(crate) fn print_statement(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Print, |p| {
            Ok(p.literal("print") && p.string_literal()? && p.literal(";"))
        })
    }

    /// The opening quote may follow whitespace; nothing inside the literal is
    /// skipped.
    pub(crate) fn string_literal(&mut self) -> ParseResult<bool> {
        self.rule(Rule::StringLiteral, |p| {
            Ok(p.literal("\"") && p.characters()? && p.raw_char(|c| c == '"'))
        })
    }

    /// Zero or more `caracter`s. Always matches.
    pub(crate) fn characters(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Characters, |p| {
            while p.character()? {}
            Ok(true)
        })
    }

    pub(crate) fn character(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Character, |p| Ok(p.raw_char(|c| STRING_ALPHABET.contains(&c))))
    }
}
