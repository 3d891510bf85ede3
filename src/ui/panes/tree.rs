//! Syntax tree pane rendering
//!
//! The pane lists each statement's rendered form, then an indented outline
//! with one row per AST node.

use crate::parser::ast::{Expression, Program, Statement};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::utils::{clamp_scroll, pane_block};

/// One row of the outline: nesting depth, node name and the node's literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub node: &'static str,
    pub detail: String,
}

impl OutlineRow {
    fn new(depth: usize, node: &'static str, detail: impl Into<String>) -> Self {
        OutlineRow {
            depth,
            node,
            detail: detail.into(),
        }
    }
}

/// Flatten the program into outline rows, depth-first.
pub fn outline(program: &Program) -> Vec<OutlineRow> {
    let mut rows = vec![OutlineRow::new(
        0,
        "Program",
        format!("{} statement(s)", program.statements.len()),
    )];
    for statement in &program.statements {
        outline_statement(statement, 1, &mut rows);
    }
    rows
}

fn outline_statement(statement: &Statement, depth: usize, rows: &mut Vec<OutlineRow>) {
    match statement {
        Statement::Let(stmt) => {
            rows.push(OutlineRow::new(depth, "LetStatement", stmt.name.name.clone()));
            match &stmt.value {
                Some(value) => outline_expression(value, depth + 1, rows),
                None => rows.push(OutlineRow::new(depth + 1, "value", "(not parsed)")),
            }
        }
        Statement::Return(stmt) => {
            rows.push(OutlineRow::new(depth, "ReturnStatement", ""));
            match &stmt.value {
                Some(value) => outline_expression(value, depth + 1, rows),
                None => rows.push(OutlineRow::new(depth + 1, "value", "(not parsed)")),
            }
        }
        Statement::Expression(stmt) => {
            rows.push(OutlineRow::new(depth, "ExpressionStatement", ""));
            outline_expression(&stmt.value, depth + 1, rows);
        }
    }
}

fn outline_expression(expression: &Expression, depth: usize, rows: &mut Vec<OutlineRow>) {
    let mut pending = vec![(depth, expression)];

    while let Some((depth, expression)) = pending.pop() {
        match expression {
            Expression::Identifier(ident) => {
                rows.push(OutlineRow::new(depth, "Identifier", ident.name.clone()));
            }
            Expression::Integer(int) => {
                rows.push(OutlineRow::new(depth, "IntegerLiteral", int.value.to_string()));
            }
            Expression::Prefix(prefix) => {
                rows.push(OutlineRow::new(depth, "PrefixExpression", prefix.operator.clone()));
                pending.push((depth + 1, &*prefix.operand));
            }
            Expression::Infix(infix) => {
                rows.push(OutlineRow::new(depth, "InfixExpression", infix.operator.clone()));
                pending.push((depth + 1, &*infix.right));
                pending.push((depth + 1, &*infix.left));
            }
        }
    }
}

fn outline_line(row: OutlineRow) -> Line<'static> {
    Line::from(vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(row.node, Style::default().fg(DEFAULT_THEME.node_name)),
        Span::raw(" "),
        Span::styled(row.detail, Style::default().fg(DEFAULT_THEME.secondary)),
    ])
}

/// Render the syntax tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ".to_string(), is_focused);

    if program.statements.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = outline(program);
    let total = program.statements.len() + 1 + rows.len();
    let visible_height = clamp_scroll(total, area, scroll_offset);

    // Only the visible rows are styled; the outline can be much taller than the pane
    let statements = program.statements.iter().map(|statement| {
        Line::from(Span::styled(
            statement.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ))
    });
    let outline_rows = rows.into_iter().map(outline_line);

    let visible_items: Vec<ListItem> = statements
        .chain(std::iter::once(Line::from("")))
        .chain(outline_rows)
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
