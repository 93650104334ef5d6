//! Main TUI application state and logic

use crate::analysis::{Analysis, Verdict};
use crate::ui::panes::{self, source::line_of_offset, SourceMarker};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Rows moved by PgUp/PgDn.
const PAGE_ROWS: usize = 10;

/// Lines kept above the marker when the source pane opens.
const MARKER_CONTEXT_LINES: usize = 3;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Symbols,
    Grammar,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> tokens -> symbols -> grammar)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Grammar,
            FocusedPane::Grammar => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Grammar,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Symbols => FocusedPane::Tokens,
            FocusedPane::Grammar => FocusedPane::Symbols,
        }
    }
}

/// The main application state
pub struct App {
    pub analysis: Analysis,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub symbols_scroll: usize,
    pub grammar_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app showing `analysis`, with the source scrolled to the marker.
    pub fn new(analysis: Analysis) -> Self {
        let source_scroll = line_of_offset(&analysis.source, analysis.marker())
            .saturating_sub(MARKER_CONTEXT_LINES);

        let status_message = match &analysis.parse {
            Ok(outcome) => format!("{} rule invocations", outcome.invocations),
            Err(_) => String::from("parse aborted"),
        };

        App {
            analysis,
            focused_pane: FocusedPane::Source,
            source_scroll,
            tokens_scroll: 0,
            symbols_scroll: 0,
            grammar_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Grammar (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tokens (top) | Symbols (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let verdict = self.analysis.verdict();
        let marker = SourceMarker {
            offset: self.analysis.marker(),
            accepted: matches!(verdict, Verdict::Accepted { .. }),
        };

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.analysis.source,
            &self.analysis.events,
            Some(marker),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_grammar_pane(
            frame,
            left_rows[1],
            self.focused_pane == FocusedPane::Grammar,
            &mut self.grammar_scroll,
        );

        panes::render_tokens_pane(
            frame,
            right_rows[0],
            self.analysis.tokens(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_symbols_pane(
            frame,
            right_rows[1],
            &self.analysis.symbols,
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        panes::render_status_bar(frame, main_chunks[1], &self.status_message, &verdict);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE_ROWS);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE_ROWS);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Symbols => &mut self.symbols_scroll,
            FocusedPane::Grammar => &mut self.grammar_scroll,
        }
    }
}
