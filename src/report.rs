//! Plain-text report of an analysis
//!
//! Token listing, syntax verdict, symbol table and grammar, in that order.

use crate::analysis::{Analysis, Verdict};
use crate::parser::grammar::PRODUCTIONS;

pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    for token in analysis.tokens() {
        out.push_str(&format!("-- {}: {}\n", token.class.label(), token.lexeme));
    }

    out.push_str(&verdict_line(&analysis.verdict()));
    out.push('\n');

    out.push_str("\nSymbol table:\n");
    for entry in analysis.symbols.entries() {
        out.push_str(&format!("Name: {}, Kind: {}\n", entry.name, entry.kind));
    }

    out.push_str("\nBNF grammar:\n");
    for production in &PRODUCTIONS {
        out.push_str(&format!("{}\n", production));
    }

    out
}

/// One-line summary of a verdict.
pub fn verdict_line(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Accepted { .. } => "Syntax analysis succeeded.".to_string(),
        Verdict::SyntaxError { position } => format!("Syntax error at position {position}"),
        Verdict::Fatal(err) => format!("Fatal recognizer error: {err}"),
    }
}
