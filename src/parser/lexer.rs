//! Lexer (tokenizer) for the toy imperative language
//!
//! Converts raw source text into classified [`Token`]s. The scanner never
//! fails: a character that no catalog pattern accepts becomes a one-character
//! [`TokenClass::Unrecognized`] token, and whitespace runs are reported as
//! [`ScanEvent::Whitespace`] so that every character of the input is accounted
//! for by exactly one event.

use super::patterns::{self, PatternKind};
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;

/// Half-open range of character offsets into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted span {start}..{end}");
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Classification assigned to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Identifier,
    ReservedWord,
    IntegerConstant,
    Operator,
    StringLiteral,
    Unrecognized,
}

impl TokenClass {
    /// Human-readable label used by the report and the inspector.
    pub fn label(self) -> &'static str {
        match self {
            TokenClass::Identifier => "Identifier",
            TokenClass::ReservedWord => "Reserved word",
            TokenClass::IntegerConstant => "Integer constant",
            TokenClass::Operator => "Operator",
            TokenClass::StringLiteral => "String literal",
            TokenClass::Unrecognized => "Unrecognized token",
        }
    }
}

impl From<PatternKind> for TokenClass {
    fn from(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Identifier => TokenClass::Identifier,
            PatternKind::IntegerConstant => TokenClass::IntegerConstant,
            PatternKind::Operator => TokenClass::Operator,
            PatternKind::StringLiteral => TokenClass::StringLiteral,
            PatternKind::ReservedWord => TokenClass::ReservedWord,
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub class: TokenClass,
    pub span: Span,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, class: TokenClass, span: Span) -> Self {
        Token {
            lexeme: lexeme.into(),
            class,
            span,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.class != TokenClass::Unrecognized
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.class.label().to_lowercase(), self.lexeme)
    }
}

/// One step of the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Token(Token),
    /// A maximal run of whitespace characters.
    Whitespace(Span),
}

impl ScanEvent {
    pub fn span(&self) -> Span {
        match self {
            ScanEvent::Token(token) => token.span,
            ScanEvent::Whitespace(span) => *span,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            ScanEvent::Token(token) => Some(token),
            ScanEvent::Whitespace(_) => None,
        }
    }

    pub fn into_token(self) -> Option<Token> {
        match self {
            ScanEvent::Token(token) => Some(token),
            ScanEvent::Whitespace(_) => None,
        }
    }
}

/// Scanner over one source text, yielding [`ScanEvent`]s lazily.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn next_event(&mut self) -> Option<ScanEvent> {
        let start = self.position;
        let ch = *self.input.get(start)?;

        if ch.is_whitespace() {
            let run = self.input[start..]
                .iter()
                .take_while(|c| c.is_whitespace())
                .count();
            self.position += run;
            return Some(ScanEvent::Whitespace(Span::new(start, self.position)));
        }

        let token = match patterns::match_at(&self.input, start) {
            Some((kind, len)) => {
                let lexeme = &self.input[start..start + len];
                let class = if kind == PatternKind::Identifier && patterns::is_reserved_word(lexeme)
                {
                    TokenClass::ReservedWord
                } else {
                    TokenClass::from(kind)
                };
                self.position += len;
                Token::new(lexeme.iter().collect::<String>(), class, Span::new(start, self.position))
            }
            None => {
                trace!(offset = start, character = %ch, "unrecognized character");
                self.position += 1;
                Token::new(ch, TokenClass::Unrecognized, Span::new(start, self.position))
            }
        };

        Some(ScanEvent::Token(token))
    }
}

impl Iterator for Lexer {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

impl FusedIterator for Lexer {}

/// Lazily tokenize `source`. Whitespace is skipped; unrecognized characters
/// are yielded as [`TokenClass::Unrecognized`] tokens.
pub fn tokenize(source: &str) -> impl Iterator<Item = Token> {
    Lexer::new(source).filter_map(ScanEvent::into_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(source: &str) -> Vec<(TokenClass, String)> {
        tokenize(source).map(|t| (t.class, t.lexeme)).collect()
    }

    #[test]
    fn test_simple_declaration() {
        let tokens = classes("int x := 5 ;");
        assert_eq!(
            tokens,
            vec![
                (TokenClass::ReservedWord, "int".to_string()),
                (TokenClass::Identifier, "x".to_string()),
                (TokenClass::Operator, ":=".to_string()),
                (TokenClass::IntegerConstant, "5".to_string()),
                (TokenClass::Operator, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_reserved_words_reclassified() {
        for word in patterns::RESERVED_WORDS {
            let tokens = classes(word);
            assert_eq!(tokens, vec![(TokenClass::ReservedWord, word.to_string())]);
        }
        assert_eq!(classes("iffy"), vec![(TokenClass::Identifier, "iffy".to_string())]);
    }

    #[test]
    fn test_unrecognized_characters_are_reported() {
        let tokens: Vec<Token> = tokenize("x ? y").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].class, TokenClass::Unrecognized);
        assert_eq!(tokens[1].lexeme, "?");
        assert_eq!(tokens[1].span, Span::new(2, 3));
    }

    #[test]
    fn test_integer_split() {
        assert_eq!(
            classes("101"),
            vec![
                (TokenClass::IntegerConstant, "10".to_string()),
                (TokenClass::IntegerConstant, "1".to_string()),
            ]
        );
        assert_eq!(classes("100"), vec![(TokenClass::IntegerConstant, "100".to_string())]);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = classes("\"bf");
        assert_eq!(
            tokens,
            vec![
                (TokenClass::Unrecognized, "\"".to_string()),
                (TokenClass::Identifier, "bf".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_events() {
        let events: Vec<ScanEvent> = Lexer::new("a  \n b").collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], ScanEvent::Whitespace(Span::new(1, 5)));
        assert_eq!(events[2].span(), Span::new(5, 6));
    }

    #[test]
    fn test_spans_use_char_offsets() {
        let tokens: Vec<Token> = tokenize("ñ x").collect();
        assert_eq!(tokens[0].class, TokenClass::Unrecognized);
        assert_eq!(tokens[1].span, Span::new(2, 3));
    }
}
