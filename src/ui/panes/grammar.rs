//! Grammar pane

use super::{clamp_scroll, pane_block};
use crate::parser::grammar::PRODUCTIONS;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the grammar pane
pub fn render_grammar_pane(
    frame: &mut Frame,
    area: Rect,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Grammar ", is_focused);
    let visible_height = clamp_scroll(PRODUCTIONS.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = PRODUCTIONS
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|production| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("<{}>", production.rule.name()),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ::= ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(production.rhs, Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
