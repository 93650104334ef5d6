//! Token stream pane

use super::{clamp_scroll, pane_block};
use crate::parser::lexer::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// One row of the token listing: index, class, lexeme, span.
pub fn token_row(index: usize, token: &Token) -> Line<'static> {
    let class_style = Style::default().fg(DEFAULT_THEME.token(token.class));
    let class_style = if token.is_recognized() {
        class_style
    } else {
        class_style.add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(
            format!("{:>4} ", index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<19}", token.class.label()), class_style),
        Span::styled(
            format!("{:<17}", token.lexeme),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            token.span.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])
}

/// Render the token pane
pub fn render_tokens_pane<'t>(
    frame: &mut Frame,
    area: Rect,
    tokens: impl Iterator<Item = &'t Token>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let rows: Vec<Line> = tokens
        .enumerate()
        .map(|(index, token)| token_row(index, token))
        .collect();
    let title = format!(" Tokens ({}) ", rows.len());
    let block = pane_block(&title, is_focused);

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(rows.len(), area, scroll_offset);
    let visible_items: Vec<ListItem> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
