//! Recognizer configuration
//!
//! Resource bounds and whitespace policy for one [`Parser`] run.
//!
//! [`Parser`]: crate::parser::parse::Parser

/// Default ceiling on rule invocations per parse.
pub const DEFAULT_INVOCATION_BUDGET: usize = 1_000_000;

/// Default ceiling on simultaneously active rules.
///
/// Each `if` level keeps two rules active (`declaracion` and
/// `estructuraControl`), so this allows roughly 250 nested conditionals.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How whitespace between terminals is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
    /// Every terminal skips leading whitespace. Whitespace inside string
    /// literals is significant.
    #[default]
    Skip,
    /// All whitespace is removed before parsing begins, so `5 5` reads as `55`.
    Strip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Rule invocations allowed before the parse aborts.
    pub invocation_budget: usize,
    /// Active rules allowed on the call chain before the parse aborts.
    pub max_depth: usize,
    pub whitespace: WhitespaceMode,
    /// Reject input that has anything but whitespace after the declaration.
    pub require_full_input: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            invocation_budget: DEFAULT_INVOCATION_BUDGET,
            max_depth: DEFAULT_MAX_DEPTH,
            whitespace: WhitespaceMode::default(),
            require_full_input: false,
        }
    }
}

impl ParserConfig {
    pub fn with_invocation_budget(mut self, budget: usize) -> Self {
        self.invocation_budget = budget;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_whitespace(mut self, mode: WhitespaceMode) -> Self {
        self.whitespace = mode;
        self
    }

    pub fn with_full_input(mut self, required: bool) -> Self {
        self.require_full_input = required;
        self
    }
}
