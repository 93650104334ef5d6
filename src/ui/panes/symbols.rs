//! Symbol table pane

use super::{clamp_scroll, pane_block};
use crate::symbols::{SymbolKind, SymbolTable};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn kind_color(kind: SymbolKind) -> ratatui::style::Color {
    match kind {
        SymbolKind::ReservedWord => DEFAULT_THEME.keyword,
        SymbolKind::Identifier => DEFAULT_THEME.identifier,
        SymbolKind::NumericConstant => DEFAULT_THEME.number,
    }
}

/// Render the symbol table pane
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    symbols: &SymbolTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Symbol Table ({}) ", symbols.len());
    let block = pane_block(&title, is_focused);

    if symbols.is_empty() {
        let paragraph = Paragraph::new("(no symbols)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let entries = symbols.entries();
    let visible_height = clamp_scroll(entries.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = entries
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<17}", entry.name),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("{:<18}", entry.kind.as_str()),
                    Style::default().fg(kind_color(entry.kind)),
                ),
                Span::styled(
                    format!("@{} ×{}", entry.first_offset, entry.occurrences),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
