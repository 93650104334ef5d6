//! Command-line options

use crate::parser::config::{ParserConfig, WhitespaceMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "lexscope")]
#[command(version, about = "Tokenize a program and check it against the grammar", long_about = None)]
pub struct Cli {
    /// Source file to analyze (the built-in demo program when omitted)
    pub file: Option<PathBuf>,

    /// Print a text report instead of starting the inspector
    #[arg(long)]
    pub plain: bool,

    /// Remove all whitespace before parsing
    #[arg(long)]
    pub strip_whitespace: bool,

    /// Reject trailing input after the declaration
    #[arg(long)]
    pub require_eof: bool,

    /// Maximum number of rule invocations per parse
    #[arg(long, value_name = "N")]
    pub budget: Option<usize>,
}

impl Cli {
    /// Recognizer configuration selected by the flags.
    pub fn config(&self) -> ParserConfig {
        let whitespace = if self.strip_whitespace {
            WhitespaceMode::Strip
        } else {
            WhitespaceMode::Skip
        };

        let config = ParserConfig::default()
            .with_whitespace(whitespace)
            .with_full_input(self.require_eof);

        match self.budget {
            Some(budget) => config.with_invocation_budget(budget),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::config::DEFAULT_INVOCATION_BUDGET;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lexscope"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.plain);
        assert_eq!(cli.config(), ParserConfig::default());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "lexscope",
            "--plain",
            "--strip-whitespace",
            "--require-eof",
            "--budget",
            "42",
            "prog.lx",
        ])
        .unwrap();
        assert!(cli.plain);
        assert_eq!(cli.file, Some(PathBuf::from("prog.lx")));

        let config = cli.config();
        assert_eq!(config.whitespace, WhitespaceMode::Strip);
        assert!(config.require_full_input);
        assert_eq!(config.invocation_budget, 42);
        assert_ne!(config.invocation_budget, DEFAULT_INVOCATION_BUDGET);
    }

    #[test]
    fn test_bad_budget_is_rejected() {
        assert!(Cli::try_parse_from(["lexscope", "--budget", "many"]).is_err());
    }
}
