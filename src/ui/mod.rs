//! Terminal inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus and scrolling
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, symbol table, grammar, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Construct an [`App`] from a finished [`Analysis`] and call [`App::run`] to
//! start the event loop.
//!
//! [`Analysis`]: crate::analysis::Analysis
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
