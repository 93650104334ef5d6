//! Expression rules
//!
//! ```text
//! expresion           ::= expresionAritmetica | constante | variable
//! expresionAritmetica ::= expresion operador expresion
//! operador            ::= "+" | "-" | "*" | "/" | ":=" | ">=" | "<=" | ">" | "<" | "=" | "<>"
//! variable            ::= identificador
//! constante           ::= entero
//! ```
//!
//! # Left recursion
//!
//! `expresionAritmetica` begins with `expresion`, which tries
//! `expresionAritmetica` first. Descending that way never consumes input, so
//! the rule is recognized iteratively instead:
//!
//! ```text
//! expresionAritmetica ::= operand (operador operand)+
//! operand             ::= constante | variable
//! ```
//!
//! Pairs are consumed left to right; a pair whose operand fails is backtracked
//! and ends the loop. This accepts the same language without ever re-entering
//! `expresion` at an unchanged cursor.
//!
//! # Ordered choice
//!
//! `operador` commits to the first alternative that matches, so `<` shadows
//! `<>`: in `a <> b` the recognizer takes `<` and then fails on `>`.
//!
//! All methods are `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::grammar::Rule;
use crate::parser::parse::{ParseResult, Parser};
use crate::parser::patterns;

/// Alternatives of `operador`, in grammar order.
pub const EXPRESSION_OPERATORS: [&str; 11] =
    ["+", "-", "*", "/", ":=", ">=", "<=", ">", "<", "=", "<>"];

impl Parser {
    pub(crate) fn expression(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Expression, |p| {
            Ok(p.arithmetic_expression()? || p.constant()? || p.variable()?)
        })
    }

    pub(crate) fn arithmetic_expression(&mut self) -> ParseResult<bool> {
        self.rule(Rule::ArithmeticExpression, |p| {
            if !p.operand()? {
                return Ok(false);
            }

            let mut pairs = 0usize;
            loop {
                let saved_pos = p.position;
                if p.operator()? && p.operand()? {
                    pairs += 1;
                } else {
                    p.position = saved_pos;
                    break;
                }
            }

            Ok(pairs > 0)
        })
    }

    /// Non-recursive alternatives of `expresion`.
    fn operand(&mut self) -> ParseResult<bool> {
        Ok(self.constant()? || self.variable()?)
    }

    pub(crate) fn operator(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Operator, |p| {
            Ok(EXPRESSION_OPERATORS.iter().any(|op| p.literal(op)))
        })
    }

    pub(crate) fn variable(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Variable, |p| p.identifier())
    }

    pub(crate) fn constant(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Constant, |p| p.integer())
    }

    /// `letter (letter | digit)*` over Unicode letters and digits, with no
    /// length cap (unlike the lexer).
    pub(crate) fn identifier(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Identifier, |p| Ok(p.scan(scan_identifier)))
    }

    pub(crate) fn integer(&mut self) -> ParseResult<bool> {
        self.rule(Rule::Integer, |p| Ok(p.scan(patterns::match_integer)))
    }
}

fn scan_identifier(input: &[char], offset: usize) -> Option<usize> {
    if !input.get(offset)?.is_alphabetic() {
        return None;
    }

    let rest = input[offset + 1..]
        .iter()
        .take_while(|c| c.is_alphanumeric())
        .count();
    Some(1 + rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::config::ParserConfig;
    use crate::parser::parse::accepts;

    fn expression_end(source: &str) -> Option<usize> {
        let mut parser = Parser::new(source, ParserConfig::default());
        parser.expression().unwrap().then_some(parser.position)
    }

    #[test]
    fn test_single_operands() {
        assert_eq!(expression_end("42"), Some(2));
        assert_eq!(expression_end("abc1"), Some(4));
        assert_eq!(expression_end(";"), None);
    }

    #[test]
    fn test_left_to_right_chain() {
        assert_eq!(expression_end("a + 1 - b * 2 / c"), Some(17));
        assert_eq!(expression_end("x >= 10"), Some(7));
    }

    #[test]
    fn test_dangling_operator_is_backtracked() {
        assert_eq!(expression_end("a + ;"), Some(1));
        assert_eq!(expression_end("a + 1 +"), Some(5));
    }

    #[test]
    fn test_integer_quirk() {
        assert_eq!(expression_end("100"), Some(3));
        assert_eq!(expression_end("101"), Some(2));
        assert!(!accepts("x := 101;").unwrap().matched);
    }

    #[test]
    fn test_ordered_choice_shadows_not_equal() {
        assert_eq!(expression_end("a <> b"), Some(1));
        let outcome = accepts("x := a <> b;").unwrap();
        assert!(!outcome.matched);
        assert_eq!(outcome.failure_position(), Some(8));
    }

    #[test]
    fn test_identifier_has_no_length_cap() {
        assert_eq!(expression_end("abcdefghijklmnopqrstuvwxyz"), Some(26));
    }

    #[test]
    fn test_identifier_accepts_unicode_letters() {
        assert!(accepts("é := 1;").unwrap().matched);
        assert!(accepts("x := año + 1;").unwrap().matched);
        assert_eq!(scan_identifier(&['1', 'é'], 0), None);
        assert!(!accepts("1é := 1;").unwrap().matched);
    }

    #[test]
    fn test_long_chain_terminates() {
        let source = format!("x := {};", vec!["a"; 5_000].join(" + "));
        let outcome = accepts(&source).unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.cursor, source.len());
    }
}
