//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: source text colored by token class, with a marker at the
//!   offset where parsing stopped or failed
//! - [`tokens`]: the token stream with classes and spans
//! - [`symbols`]: the symbol table
//! - [`grammar`]: the BNF productions
//! - [`status`]: status bar with the verdict and keybindings
//!
//! Each pane module exports a `render_*` function taking the frame, the area,
//! the data to show, whether the pane is focused, and its scroll offset. The
//! scroll offset is clamped during rendering, so callers may overshoot.

pub mod grammar;
pub mod source;
pub mod status;
pub mod symbols;
pub mod tokens;

pub use grammar::render_grammar_pane;
pub use source::{render_source_pane, SourceMarker};
pub use status::render_status_bar;
pub use symbols::render_symbols_pane;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` for `total_items` rows and return the visible height.
pub(crate) fn clamp_scroll(total_items: usize, area: Rect, scroll_offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    visible_height
}
