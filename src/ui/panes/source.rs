//! Source pane rendering with syntax highlighting
//!
//! Shows the line being edited. Words are classified with the lexer's own
//! keyword table so highlighting always agrees with tokenization.

use crate::parser::lexer::{lookup_ident, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::utils::pane_block;

/// Syntax highlighting for one line of gilt source
pub fn highlight_source(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphabetic() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let style = word_style(&word);
            spans.push(Span::styled(word, style));
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            spans.push(Span::styled(digits, Style::default().fg(DEFAULT_THEME.number)));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            ';' | ',' => Style::default().fg(DEFAULT_THEME.fg),
            '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>' => {
                Style::default().fg(DEFAULT_THEME.operator)
            }
            ' ' | '\t' | '\r' | '\n' => Style::default(),
            _ => Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::UNDERLINED), // Illegal
        };

        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    match lookup_ident(word) {
        TokenKind::True | TokenKind::False => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Ident => Style::default().fg(DEFAULT_THEME.fg),
        _ => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
    }
}

/// Render the source input pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    cursor: usize,
    is_focused: bool,
) {
    let block = pane_block(" Source ".to_string(), is_focused);

    // Keep the cursor on screen for inputs wider than the pane
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let scroll = cursor.saturating_sub(inner_width - 1);

    let paragraph = Paragraph::new(highlight_source(input))
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if is_focused {
        let x = area.x + 1 + (cursor - scroll) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_splits_words_numbers_and_operators() {
        let line = highlight_source("let x1 = 10;");

        assert_eq!(
            span_texts(&line),
            vec!["let", " ", "x", "1", " ", "=", " ", "10", ";"]
        );
    }

    #[test]
    fn test_highlight_styles() {
        let line = highlight_source("let foo @");

        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(line.spans[2].style.fg, Some(DEFAULT_THEME.fg));
        assert_eq!(line.spans[4].style.fg, Some(DEFAULT_THEME.error));
    }
}
