//! Main TUI application state and logic

use crate::parser::ast::Program;
use crate::parser::{Lexer, ParseError, Parser, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> diagnostics -> tokens -> tree)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Diagnostics => FocusedPane::Source,
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }
}

/// Everything the panes show about one version of the input.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Full token stream, including the final `Eof`
    pub tokens: Vec<Token>,
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl Analysis {
    /// Tokenize and parse `source` independently; the two passes share nothing.
    pub fn of(source: &str) -> Self {
        let tokens = Lexer::new(source).tokenize();
        let (program, errors) = Parser::from_source(source).parse_program();
        Analysis {
            tokens,
            program,
            errors,
        }
    }
}

/// The main application state
pub struct App {
    /// The source being edited
    pub input: String,

    /// Cursor position, in characters
    pub cursor: usize,

    /// Tokens, tree and diagnostics for `input`
    pub analysis: Analysis,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app editing the given source
    pub fn new(input: String) -> Self {
        let cursor = input.chars().count();
        let analysis = Analysis::of(&input);
        App {
            input,
            cursor,
            analysis,
            focused_pane: FocusedPane::Source,
            tokens_scroll: 0,
            tree_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input line on top, 3 panes below, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let source_area = main_chunks[0];
        let pane_area = main_chunks[1];
        let status_area = main_chunks[2];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(pane_area);

        // Right column: Tree (top) | Diagnostics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            source_area,
            &self.input,
            self.cursor,
            self.focused_pane == FocusedPane::Source,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[0],
            &self.analysis.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[0],
            &self.analysis.program,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            right_rows[1],
            &self.analysis.errors,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_status_bar(frame, status_area, &self.status_message, &self.analysis);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {}
                FocusedPane::Tokens => self.tokens_scroll = self.tokens_scroll.saturating_sub(1),
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_sub(1),
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {}
                FocusedPane::Tokens => self.tokens_scroll = self.tokens_scroll.saturating_add(1),
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_add(1),
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_add(1)
                }
            },
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
                self.reanalyze();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                    self.reanalyze();
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                    self.reanalyze();
                }
            }
            _ => {}
        }
    }

    /// Byte index of the `chars`-th character of the input
    fn byte_offset(&self, chars: usize) -> usize {
        self.input
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn reanalyze(&mut self) {
        self.analysis = Analysis::of(&self.input);
        self.status_message = if self.analysis.errors.is_empty() {
            format!("{} statement(s)", self.analysis.program.statements.len())
        } else {
            format!("{} diagnostic(s)", self.analysis.errors.len())
        };
        tracing::trace!(input = %self.input, "reanalyzed");
    }
}
