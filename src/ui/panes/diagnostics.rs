//! Diagnostics pane rendering

use crate::parser::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

use super::utils::{clamp_scroll, pane_block};

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    errors: &[ParseError],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Diagnostics ({}) ", errors.len()), is_focused);

    if errors.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new("(no diagnostics)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = clamp_scroll(errors.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = errors
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, error)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(error.to_string(), Style::default().fg(DEFAULT_THEME.error)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
