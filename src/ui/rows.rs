// src/ui/rows.rs
//! Projection of a directory listing into renderable rows.
//!
//! Rows are rebuilt in full whenever the listing changes; they own no state
//! of their own. Row 0 is the synthetic ".." parent row, present whenever
//! the current directory has a parent, and the remaining rows map one-to-one
//! onto the sorted listing.

use crate::fs::DirEntry;
use crate::ui::icons::{icon_for_entry, parent_icon, IconSet};

/// Label shown on the synthetic parent row.
pub const PARENT_LABEL: &str = "..";

/// What a row stands for, and what activating it should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Synthetic up-navigation row.
    Parent,
    /// Index into the listing this row was built from.
    Entry(usize),
}

/// One renderable row: icon + label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub icon: &'static str,
    pub kind: RowKind,
}

impl Row {
    /// The line handed to the list widget.
    pub fn display(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// Build the full row sequence for a listing.
pub fn build_rows(entries: &[DirEntry], can_go_up: bool, icons: IconSet) -> Vec<Row> {
    let mut rows = Vec::with_capacity(entries.len() + 1);

    if can_go_up {
        rows.push(Row {
            label: PARENT_LABEL.to_string(),
            icon: parent_icon(icons),
            kind: RowKind::Parent,
        });
    }

    for (idx, entry) in entries.iter().enumerate() {
        rows.push(Row {
            label: entry.name.clone(),
            icon: icon_for_entry(entry.is_dir, icons),
            kind: RowKind::Entry(idx),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str, is_dir: bool) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            path: PathBuf::from("/home/user").join(name),
            is_dir,
        }
    }

    #[test]
    fn parent_row_leads_when_not_at_root() {
        let entries = vec![entry("docs", true), entry("a.txt", false)];
        let rows = build_rows(&entries, true, IconSet::Ascii);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, RowKind::Parent);
        assert_eq!(rows[0].label, "..");
        assert_eq!(rows[1].kind, RowKind::Entry(0));
        assert_eq!(rows[2].kind, RowKind::Entry(1));
    }

    #[test]
    fn parent_row_suppressed_at_root() {
        let entries = vec![entry("docs", true)];
        let rows = build_rows(&entries, false, IconSet::Ascii);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RowKind::Entry(0));
    }

    #[test]
    fn icons_follow_the_two_way_switch() {
        let entries = vec![entry("docs", true), entry("a.txt", false)];
        let rows = build_rows(&entries, true, IconSet::Ascii);

        assert_eq!(rows[0].icon, "[^]");
        assert_eq!(rows[1].icon, "[D]");
        assert_eq!(rows[2].icon, "[F]");
    }

    #[test]
    fn sorted_listing_scenario() {
        // /home/user with docs/, b.txt, a.txt renders as [.., docs, a.txt, b.txt]
        let mut entries = vec![
            entry("b.txt", false),
            entry("a.txt", false),
            entry("docs", true),
        ];
        crate::fs::sort_entries(&mut entries);
        let rows = build_rows(&entries, true, IconSet::Ascii);

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["..", "docs", "a.txt", "b.txt"]);
    }
}
