//! Token stream pane rendering

use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::utils::{clamp_scroll, pane_block};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Illegal => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        TokenKind::Eof => Style::default().fg(DEFAULT_THEME.comment),
        TokenKind::Ident => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Int => Style::default().fg(DEFAULT_THEME.number),
        kind if kind.is_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

/// One row per token: index, kind, literal.
pub fn token_line(index: usize, token: &Token) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>3} ", index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<9}", token.kind.name()), kind_style(token.kind)),
        Span::styled(
            format!("{:?}", token.literal),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
    ])
}

/// Render the tokens pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Tokens ({}) ", tokens.len()), is_focused);

    let visible_height = clamp_scroll(tokens.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, token)| ListItem::new(token_line(i, token)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
