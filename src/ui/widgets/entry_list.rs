// src/ui/widgets/entry_list.rs
//! The directory listing widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::rows::Row;

/// Render the picker rows as a stateful list.
pub fn render_entry_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    rows: &[Row],
    state: &mut ListState,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    if rows.is_empty() {
        f.render_widget(Paragraph::new("Empty directory").block(block), area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row.display())).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
