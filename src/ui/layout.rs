// src/ui/layout.rs
//! Layout computation for the picker dialog.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Header band showing the current directory path.
    pub header: Rect,
    /// The entry list.
    pub list: Rect,
    /// Status band for notices and key hints.
    pub status: Rect,
}

/// Split the frame into header, list and status bands.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    ComputedLayout {
        header: chunks[0],
        list: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_the_frame() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 3);
        assert_eq!(layout.list.height, 24 - 6);
        assert_eq!(
            layout.header.height + layout.list.height + layout.status.height,
            24
        );
    }
}
