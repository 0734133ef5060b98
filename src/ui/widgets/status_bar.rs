// src/ui/widgets/status_bar.rs
//! Status band: transient notices, or key hints when there is none.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::PickerMode;

/// Render the status band.
pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, notice: Option<&str>, mode: PickerMode) {
    let hints = match mode {
        PickerMode::File => "↑/↓ move   Enter open   ←/Backspace up   r refresh   q cancel",
        PickerMode::Folder => {
            "↑/↓ move   Enter open   ←/Backspace up   s select folder   r refresh   q cancel"
        }
    };

    let paragraph = match notice {
        Some(msg) => Paragraph::new(msg.to_string()).style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(hints),
    };

    f.render_widget(paragraph.block(Block::default().borders(Borders::ALL)), area);
}
