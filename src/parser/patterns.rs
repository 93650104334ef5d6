//! Pattern catalog for the lexer
//!
//! Each lexical class is an independent matcher over the character window
//! starting at a given offset. A matcher returns the length of its match, or
//! `None`. The catalog evaluates them in priority order:
//!
//! 1. identifier (re-tested against the reserved-word pattern by the lexer)
//! 2. integer constant
//! 3. operator
//! 4. string literal
//! 5. reserved word
//!
//! The classes are disjoint on their first character, so the first pattern
//! that matches is also the longest one. Reserved words never win the race at
//! catalog level because the identifier pattern always covers them; the lexer
//! reclassifies instead.

use std::fmt;

/// Words that are always classified as reserved, never as identifiers.
pub const RESERVED_WORDS: [&str; 5] = ["if", "else", "for", "print", "int"];

/// Maximum number of characters in one identifier lexeme.
pub const MAX_IDENTIFIER_LEN: usize = 15;

/// Operators, two-character forms first so they shadow their prefixes.
pub const OPERATORS: [&str; 20] = [
    ":=", ">=", "<=", "<>", "..", "+", "-", "*", "/", ">", "<", "=", "{", "}", "[", "]", "(",
    ")", ",", ";",
];

/// Characters allowed between the quotes of a string literal.
pub const STRING_ALPHABET: [char; 5] = ['b', 'f', 'h', 'j', 'k'];

/// A lexical class known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Identifier,
    IntegerConstant,
    Operator,
    StringLiteral,
    ReservedWord,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternKind::Identifier => "identifier",
            PatternKind::IntegerConstant => "integer constant",
            PatternKind::Operator => "operator",
            PatternKind::StringLiteral => "string literal",
            PatternKind::ReservedWord => "reserved word",
        };
        f.write_str(name)
    }
}

/// Signature shared by every matcher in the catalog.
pub type Matcher = fn(&[char], usize) -> Option<usize>;

/// A named matcher.
#[derive(Clone, Copy)]
pub struct Pattern {
    pub kind: PatternKind,
    matcher: Matcher,
}

impl Pattern {
    /// Length of the match at `offset`, if any.
    pub fn matches(&self, input: &[char], offset: usize) -> Option<usize> {
        (self.matcher)(input, offset)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern").field("kind", &self.kind).finish()
    }
}

/// The catalog, in priority order.
pub const CATALOG: [Pattern; 5] = [
    Pattern {
        kind: PatternKind::Identifier,
        matcher: match_identifier,
    },
    Pattern {
        kind: PatternKind::IntegerConstant,
        matcher: match_integer,
    },
    Pattern {
        kind: PatternKind::Operator,
        matcher: match_operator,
    },
    Pattern {
        kind: PatternKind::StringLiteral,
        matcher: match_string_literal,
    },
    Pattern {
        kind: PatternKind::ReservedWord,
        matcher: match_reserved_word,
    },
];

/// Run the catalog at `offset` and return the winning class and match length.
pub fn match_at(input: &[char], offset: usize) -> Option<(PatternKind, usize)> {
    CATALOG
        .iter()
        .find_map(|pattern| pattern.matches(input, offset).map(|len| (pattern.kind, len)))
}

/// `[a-zA-Z][a-zA-Z0-9]{0,14}`
pub fn match_identifier(input: &[char], offset: usize) -> Option<usize> {
    let first = input.get(offset)?;
    if !first.is_ascii_alphabetic() {
        return None;
    }

    let rest = input[offset + 1..]
        .iter()
        .take(MAX_IDENTIFIER_LEN - 1)
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();

    Some(1 + rest)
}

/// `100`, `[1-9][0-9]?` or `0`, longest alternative first.
///
/// Anything past two digits is left for the next scan step, so `101` yields
/// `10` here and `1` afterwards, and `007` yields `0`.
pub fn match_integer(input: &[char], offset: usize) -> Option<usize> {
    if starts_with_at(input, offset, "100") {
        return Some(3);
    }

    match input.get(offset)? {
        '1'..='9' => {
            let second = input.get(offset + 1).is_some_and(|c| c.is_ascii_digit());
            Some(if second { 2 } else { 1 })
        }
        '0' => Some(1),
        _ => None,
    }
}

pub fn match_operator(input: &[char], offset: usize) -> Option<usize> {
    OPERATORS
        .iter()
        .find(|op| starts_with_at(input, offset, op))
        .map(|op| op.len())
}

/// `"` followed by zero or more of `b f h j k` and a closing `"`.
pub fn match_string_literal(input: &[char], offset: usize) -> Option<usize> {
    if input.get(offset) != Some(&'"') {
        return None;
    }

    let body = input[offset + 1..]
        .iter()
        .take_while(|c| STRING_ALPHABET.contains(c))
        .count();

    let close = offset + 1 + body;
    (input.get(close) == Some(&'"')).then_some(body + 2)
}

/// One of [`RESERVED_WORDS`] with word boundaries on both sides.
pub fn match_reserved_word(input: &[char], offset: usize) -> Option<usize> {
    if offset > 0 && input.get(offset - 1).is_some_and(|c| is_word_char(*c)) {
        return None;
    }

    RESERVED_WORDS
        .iter()
        .find(|word| {
            starts_with_at(input, offset, word)
                && !input
                    .get(offset + word.len())
                    .is_some_and(|c| is_word_char(*c))
        })
        .map(|word| word.len())
}

/// Whether a complete lexeme is a reserved word.
pub fn is_reserved_word(lexeme: &[char]) -> bool {
    !lexeme.is_empty() && match_reserved_word(lexeme, 0) == Some(lexeme.len())
}

/// Exact comparison of `literal` against the input at `offset`.
pub fn starts_with_at(input: &[char], offset: usize, literal: &str) -> bool {
    let mut position = offset;
    for expected in literal.chars() {
        if input.get(position) != Some(&expected) {
            return false;
        }
        position += 1;
    }
    true
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
