// Integration tests for the lexer, the recognizer and the report

use lexscope::analysis::{Analysis, Verdict, DEMO_SOURCE};
use lexscope::parser::{
    accepts, accepts_with, tokenize, ParseError, ParserConfig, TokenClass, WhitespaceMode,
};
use lexscope::report::render_report;
use lexscope::symbols::SymbolKind;
use pretty_assertions::assert_eq;

fn demo(name: &str) -> String {
    let path = format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {}", path, e))
}

fn lexemes(source: &str) -> Vec<(TokenClass, String)> {
    tokenize(source).map(|t| (t.class, t.lexeme)).collect()
}

#[test]
fn test_tokenize_declaration() {
    assert_eq!(
        lexemes("int x := 5 ;"),
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
fn test_integer_boundaries() {
    assert_eq!(
        lexemes("100"),
        vec![(TokenClass::IntegerConstant, "100".to_string())]
    );
    assert_eq!(
        lexemes("101"),
        vec![
            (TokenClass::IntegerConstant, "10".to_string()),
            (TokenClass::IntegerConstant, "1".to_string()),
        ]
    );
}

#[test]
fn test_long_identifier_is_split() {
    let tokens: Vec<_> = tokenize("abcdefghijklmnopq").collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "abcdefghijklmno");
    assert_eq!(tokens[1].lexeme, "pq");
    assert!(tokens.iter().all(|t| t.class == TokenClass::Identifier));
}

#[test]
fn test_unrecognized_characters_are_reported() {
    let tokens: Vec<_> = tokenize("x := 5 @ ;").collect();
    let bad: Vec<_> = tokens.iter().filter(|t| !t.is_recognized()).collect();
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].lexeme, "@");
    assert_eq!(bad[0].span.start, 7);
}

#[test]
fn test_assignment_accepted() {
    let outcome = accepts("x := 5 ;").expect("parse aborted");
    assert!(outcome.matched);
    assert_eq!(outcome.cursor, 8);
}

#[test]
fn test_missing_expression_rejected() {
    let outcome = accepts("x := ;").expect("parse aborted");
    assert!(!outcome.matched);
    assert_eq!(outcome.failure_position(), Some(5));
}

#[test]
fn test_demo_assignment() {
    let source = demo("assignment.lx");
    let outcome = accepts(&source).expect("parse aborted");
    assert!(outcome.matched);
    assert_eq!(outcome.cursor, source.trim_end().chars().count());
}

#[test]
fn test_demo_conditional() {
    let source = demo("conditional.lx");
    let analysis = Analysis::run(source, ParserConfig::default());
    assert!(matches!(analysis.verdict(), Verdict::Accepted { .. }));
    assert_eq!(analysis.symbols.kind("if"), Some(SymbolKind::ReservedWord));
    assert_eq!(analysis.symbols.kind("count"), Some(SymbolKind::Identifier));
    assert_eq!(analysis.symbols.kind("100"), Some(SymbolKind::NumericConstant));
}

#[test]
fn test_demo_print_error() {
    let analysis = Analysis::run(demo("print_error.lx"), ParserConfig::default());
    assert_eq!(analysis.verdict(), Verdict::SyntaxError { position: 8 });
}

#[test]
fn test_default_demo_matches_builtin() {
    assert_eq!(demo("default.lx"), DEMO_SOURCE);
    let analysis = Analysis::run(DEMO_SOURCE, ParserConfig::default());
    assert_eq!(analysis.verdict(), Verdict::SyntaxError { position: 4 });
    assert_eq!(analysis.unrecognized().count(), 0);
}

#[test]
fn test_strip_whitespace_joins_digits() {
    let source = "x := 5 5;";
    let skip = accepts(source).expect("parse aborted");
    assert!(!skip.matched);
    assert_eq!(skip.failure_position(), Some(7));

    let strip = ParserConfig::default().with_whitespace(WhitespaceMode::Strip);
    let outcome = accepts_with(source, &strip).expect("parse aborted");
    assert!(outcome.matched);
    assert_eq!(outcome.cursor, source.chars().count());
}

#[test]
fn test_require_full_input() {
    let strict = ParserConfig::default().with_full_input(true);
    assert!(accepts("x := 1; y").unwrap().matched);
    assert!(!accepts_with("x := 1; y", &strict).unwrap().matched);
}

#[test]
fn test_long_operator_chain_terminates() {
    let mut source = String::from("x := ");
    for i in 0..5000 {
        source.push_str(if i % 2 == 0 { "a + " } else { "7 * " });
    }
    source.push_str("1;");

    let outcome = accepts(&source).expect("parse aborted");
    assert!(outcome.matched);
    assert_eq!(outcome.cursor, source.chars().count());
}

#[test]
fn test_moderate_nesting_accepted() {
    let levels = 100;
    let source = format!(
        "{}x := 1;{}",
        "if a { ".repeat(levels),
        " } else { y := 2; }".repeat(levels)
    );
    let outcome = accepts(&source).expect("parse aborted");
    assert!(outcome.matched);
}

#[test]
fn test_deep_nesting_is_bounded() {
    let levels = 1000;
    let source = format!(
        "{}x := 1;{}",
        "if a { ".repeat(levels),
        " } else { y := 2; }".repeat(levels)
    );
    let err = accepts(&source).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 512, .. }));
}

#[test]
fn test_budget_exhaustion_is_fatal() {
    let config = ParserConfig::default().with_invocation_budget(3);
    let analysis = Analysis::run(DEMO_SOURCE, config);
    match analysis.verdict() {
        Verdict::Fatal(ParseError::InvocationBudgetExceeded { limit, .. }) => {
            assert_eq!(limit, 3)
        }
        other => panic!("expected a fatal budget error, got {:?}", other),
    }
    assert!(render_report(&analysis).contains("Fatal recognizer error"));
}

#[test]
fn test_report_for_accepted_print() {
    let analysis = Analysis::run("print \"bk\";", ParserConfig::default());
    let report = render_report(&analysis);
    let head: Vec<&str> = report.lines().take(4).collect();
    assert_eq!(
        head,
        vec![
            "-- Reserved word: print",
            "-- String literal: \"bk\"",
            "-- Operator: ;",
            "Syntax analysis succeeded.",
        ]
    );
    assert!(report.contains("Name: print, Kind: reserved_word"));
    assert!(report.contains("<programa> ::= <declaracion>"));
}

#[test]
fn test_crate_doc_program_is_accepted() {
    let source = "if x > 5 { print \"bfh\"; } else { x := 0; }";
    let outcome = accepts(source).expect("parse aborted");
    assert!(outcome.matched);
    assert_eq!(outcome.cursor, source.chars().count());
}
