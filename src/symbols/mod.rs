//! Symbol table built from the token stream
//!
//! Every identifier, reserved word and integer constant is recorded once,
//! keyed by its lexeme. Operators, string literals and unrecognized
//! characters never enter the table.

use crate::parser::lexer::{Token, TokenClass};
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification stored for a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    ReservedWord,
    Identifier,
    NumericConstant,
}

impl SymbolKind {
    /// Kind recorded for a token class, if the class belongs in the table.
    pub fn from_class(class: TokenClass) -> Option<Self> {
        match class {
            TokenClass::ReservedWord => Some(SymbolKind::ReservedWord),
            TokenClass::Identifier => Some(SymbolKind::Identifier),
            TokenClass::IntegerConstant => Some(SymbolKind::NumericConstant),
            TokenClass::Operator | TokenClass::StringLiteral | TokenClass::Unrecognized => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::ReservedWord => "reserved_word",
            SymbolKind::Identifier => "identifier",
            SymbolKind::NumericConstant => "numeric_constant",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: SymbolKind,
    /// Offset of the first occurrence in the source.
    pub first_offset: usize,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a token stream.
    pub fn build<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Record one token. Returns `true` when a new name was inserted.
    ///
    /// A name keeps the kind of its first insertion, except that a reserved
    /// word always wins and is never downgraded.
    pub fn record(&mut self, token: &Token) -> bool {
        let Some(kind) = SymbolKind::from_class(token.class) else {
            return false;
        };

        match self.entries.get_mut(&token.lexeme) {
            Some(entry) => {
                entry.occurrences += 1;
                if kind == SymbolKind::ReservedWord {
                    entry.kind = SymbolKind::ReservedWord;
                }
                false
            }
            None => {
                self.entries.insert(
                    token.lexeme.clone(),
                    SymbolEntry {
                        name: token.lexeme.clone(),
                        kind,
                        first_offset: token.span.start,
                        occurrences: 1,
                    },
                );
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn kind(&self, name: &str) -> Option<SymbolKind> {
        self.get(name).map(|entry| entry.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn entries(&self) -> Vec<&SymbolEntry> {
        let mut entries: Vec<&SymbolEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::{tokenize, Span};

    #[test]
    fn test_build_from_tokens() {
        let tokens: Vec<Token> = tokenize("int x := 5; x := x + 5; print \"b\";").collect();
        let table = SymbolTable::build(&tokens);

        assert_eq!(table.len(), 4);
        assert_eq!(table.kind("int"), Some(SymbolKind::ReservedWord));
        assert_eq!(table.kind("print"), Some(SymbolKind::ReservedWord));
        assert_eq!(table.kind("x"), Some(SymbolKind::Identifier));
        assert_eq!(table.kind("5"), Some(SymbolKind::NumericConstant));
        assert_eq!(table.kind(":="), None);
        assert_eq!(table.kind("\"b\""), None);

        let x = table.get("x").unwrap();
        assert_eq!(x.occurrences, 3);
        assert_eq!(x.first_offset, 4);
    }

    #[test]
    fn test_repeated_lexeme_is_noop() {
        let mut table = SymbolTable::new();
        let token = Token::new("y", TokenClass::Identifier, Span::new(0, 1));
        assert!(table.record(&token));
        assert!(!table.record(&token));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_reserved_word_never_downgraded() {
        let mut table = SymbolTable::new();
        table.record(&Token::new("if", TokenClass::ReservedWord, Span::new(0, 2)));
        table.record(&Token::new("if", TokenClass::Identifier, Span::new(3, 5)));
        assert_eq!(table.kind("if"), Some(SymbolKind::ReservedWord));

        let mut table = SymbolTable::new();
        table.record(&Token::new("for", TokenClass::Identifier, Span::new(0, 3)));
        table.record(&Token::new("for", TokenClass::ReservedWord, Span::new(4, 7)));
        assert_eq!(table.kind("for"), Some(SymbolKind::ReservedWord));
    }

    #[test]
    fn test_unrecognized_tokens_skipped() {
        let tokens: Vec<Token> = tokenize("? # @").collect();
        assert!(SymbolTable::build(&tokens).is_empty());
    }

    #[test]
    fn test_entries_sorted() {
        let tokens: Vec<Token> = tokenize("zeta alpha 7 mid").collect();
        let table = SymbolTable::build(&tokens);
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["7", "alpha", "mid", "zeta"]);
    }
}
