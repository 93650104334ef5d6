//! Source pane rendering with token-class highlighting
//!
//! Characters are colored by the class of the token that covers them, using
//! the lexer's own scan events rather than a separate highlighter. The offset
//! where parsing stopped (accepted) or failed (rejected) gets a colored
//! background; when that offset is a line break or the end of input, a blank
//! marker cell is appended to the line instead.

use super::{clamp_scroll, pane_block};
use crate::parser::lexer::{ScanEvent, TokenClass};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Offset to highlight and whether the parse succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMarker {
    pub offset: usize,
    pub accepted: bool,
}

impl SourceMarker {
    fn style(self) -> Style {
        let bg = if self.accepted {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}

/// Split the source into styled lines.
pub fn highlight_source(
    source: &str,
    events: &[ScanEvent],
    marker: Option<SourceMarker>,
) -> Vec<Line<'static>> {
    let chars: Vec<char> = source.chars().collect();
    let mut classes: Vec<Option<TokenClass>> = vec![None; chars.len()];
    for token in events.iter().filter_map(ScanEvent::token) {
        for class in &mut classes[token.span.start..token.span.end] {
            *class = Some(token.class);
        }
    }

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for (offset, &ch) in chars.iter().enumerate() {
        let marked = marker.filter(|m| m.offset == offset);

        if ch == '\n' {
            flush_run(&mut spans, &mut run, run_style);
            if let Some(m) = marked {
                spans.push(Span::styled(" ", m.style()));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }

        let style = match marked {
            Some(m) => m.style(),
            None => Style::default().fg(
                classes[offset].map_or(DEFAULT_THEME.fg, |class| DEFAULT_THEME.token(class)),
            ),
        };
        if style != run_style {
            flush_run(&mut spans, &mut run, run_style);
            run_style = style;
        }
        run.push(if ch == '\t' { ' ' } else { ch });
    }

    flush_run(&mut spans, &mut run, run_style);
    if let Some(m) = marker.filter(|m| m.offset >= chars.len()) {
        spans.push(Span::styled(" ", m.style()));
    }
    lines.push(Line::from(spans));

    lines
}

fn flush_run(spans: &mut Vec<Span<'static>>, run: &mut String, style: Style) {
    if !run.is_empty() {
        spans.push(Span::styled(std::mem::take(run), style));
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    events: &[ScanEvent],
    marker: Option<SourceMarker>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines = highlight_source(source, events, marker);
    let visible_height = clamp_scroll(lines.len(), area, scroll_offset);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num_str = format!("{:4} ", idx + 1);
            let mut spans = vec![Span::styled(
                line_num_str,
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Zero-based line containing `offset`.
pub fn line_of_offset(source: &str, offset: usize) -> usize {
    source.chars().take(offset).filter(|&c| c == '\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_preserve_text() {
        let source = "x := 5;\nprint \"b\";";
        let events: Vec<ScanEvent> = Lexer::new(source).collect();
        let lines = highlight_source(source, &events, None);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "x := 5;");
        assert_eq!(text(&lines[1]), "print \"b\";");
    }

    #[test]
    fn test_marker_at_end_appends_cell() {
        let source = "x := 5;";
        let events: Vec<ScanEvent> = Lexer::new(source).collect();
        let marker = SourceMarker {
            offset: 7,
            accepted: true,
        };
        let lines = highlight_source(source, &events, Some(marker));
        assert_eq!(text(&lines[0]), "x := 5; ");
        let last = lines[0].spans.last().unwrap();
        assert_eq!(last.style.bg, Some(DEFAULT_THEME.success));
    }

    #[test]
    fn test_marker_inside_line() {
        let source = "x := ;";
        let events: Vec<ScanEvent> = Lexer::new(source).collect();
        let marker = SourceMarker {
            offset: 5,
            accepted: false,
        };
        let lines = highlight_source(source, &events, Some(marker));
        let marked: Vec<&Span> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(DEFAULT_THEME.error))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].content, ";");
    }

    #[test]
    fn test_line_of_offset() {
        assert_eq!(line_of_offset("a\nb\nc", 0), 0);
        assert_eq!(line_of_offset("a\nb\nc", 2), 1);
        assert_eq!(line_of_offset("a\nb\nc", 4), 2);
    }
}
