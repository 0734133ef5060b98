// src/app/state.rs
//! Picker state management.
//!
//! `Picker` owns where the user currently is in the directory tree and the
//! listing generated for it. Rendering only projects this state; every
//! mutation goes through the navigation operations below.

use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;
use ratatui::{
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use crate::{
    config::Config,
    fs::{self, tail_path, DirEntry},
    ui::{
        icons::IconSet,
        keybindings::{key_to_action, NavigationAction},
        layout::compute_layout,
        rows::{build_rows, Row, RowKind},
        widgets::{render_entry_list, render_status_bar},
    },
};

/// Which kind of path the dialog hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    /// Activating a file row ends the dialog with that file.
    File,
    /// Rows only navigate; the confirm key accepts the current directory.
    Folder,
}

impl PickerMode {
    pub fn title(&self) -> &'static str {
        match self {
            PickerMode::File => "Select a file",
            PickerMode::Folder => "Select a folder",
        }
    }
}

/// How a dialog run ended. Produced exactly once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(PathBuf),
    Cancelled,
}

/// Main dialog state.
pub struct Picker {
    pub mode: PickerMode,
    /// Directory currently being browsed
    pub current_dir: PathBuf,
    /// Listing generated for `current_dir`
    pub entries: Vec<DirEntry>,
    /// Renderable rows, rebuilt in full whenever the listing changes
    pub rows: Vec<Row>,
    /// List widget state
    pub state: ListState,
    /// Currently highlighted row index
    pub selected: usize,
    /// Transient message, dismissed by the next key press
    pub notice: Option<String>,
    /// Glyph set for row icons
    pub icons: IconSet,
    /// Drop plain files from listings
    folders_only: bool,
}

impl Picker {
    /// Create a picker viewing `start` if it is an accessible directory,
    /// falling back to the filesystem root with a notice otherwise.
    pub fn new(mode: PickerMode, start: Option<PathBuf>, config: &Config) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));

        let mut picker = Self {
            mode,
            current_dir: default_root(),
            entries: Vec::new(),
            rows: Vec::new(),
            state,
            selected: 0,
            notice: None,
            icons: config.icon_set(),
            folders_only: config.picker.folders_only,
        };

        // The result contract hands back absolute paths, so browsing starts
        // from an absolute directory.
        let requested = start
            .or_else(|| config.picker.start_dir.clone())
            .map(|p| std::path::absolute(&p).unwrap_or(p));
        let entered = match &requested {
            Some(path) if path.is_dir() => picker.enter_dir(path.clone()),
            _ => false,
        };

        if !entered {
            if let Some(path) = requested {
                warn!(path = %path.display(), "invalid start path, falling back to root");
                picker.notice = Some(format!("{} is not a valid directory", path.display()));
            }
            let root = default_root();
            if !picker.enter_dir(root.clone()) {
                // Even an unreadable root leaves us somewhere well-defined.
                picker.current_dir = root;
            }
        }

        picker
    }

    pub fn can_go_up(&self) -> bool {
        self.current_dir.parent().is_some()
    }

    /// Handle a key event. `Some` ends the dialog with that outcome.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        // Notices are transient: any key dismisses the previous one.
        self.notice = None;

        let outcome = match key_to_action(&key) {
            NavigationAction::Down => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                None
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                None
            }
            NavigationAction::First => {
                self.selected = 0;
                None
            }
            NavigationAction::Last => {
                self.selected = self.rows.len().saturating_sub(1);
                None
            }
            NavigationAction::Activate => self.activate(),
            NavigationAction::Back => {
                if self.ascend() {
                    None
                } else {
                    // Back at the root closes the dialog instead.
                    Some(Outcome::Cancelled)
                }
            }
            NavigationAction::Confirm => match self.mode {
                PickerMode::Folder => {
                    debug!(path = %self.current_dir.display(), "folder confirmed");
                    Some(Outcome::Selected(self.current_dir.clone()))
                }
                PickerMode::File => None,
            },
            NavigationAction::Refresh => {
                self.refresh();
                None
            }
            NavigationAction::Cancel => Some(Outcome::Cancelled),
            NavigationAction::None => None,
        };

        self.sync_list_state();
        outcome
    }

    /// Activate the highlighted row: ascend on the parent row, descend into
    /// directories, select files in file mode.
    fn activate(&mut self) -> Option<Outcome> {
        let row = self.rows.get(self.selected)?;
        match row.kind {
            RowKind::Parent => {
                self.ascend();
                None
            }
            RowKind::Entry(idx) => {
                let entry = self.entries.get(idx)?.clone();
                if entry.is_dir {
                    self.descend(entry);
                    None
                } else if self.mode == PickerMode::File {
                    debug!(path = %entry.path.display(), "file selected");
                    Some(Outcome::Selected(entry.path))
                } else {
                    None
                }
            }
        }
    }

    /// Enter a child directory. The listing may be stale, so directory-ness
    /// is re-checked against the live filesystem first; a vanished target
    /// refuses the transition and re-lists the current directory.
    fn descend(&mut self, entry: DirEntry) {
        if entry.path.is_dir() {
            self.enter_dir(entry.path);
        } else {
            warn!(path = %entry.path.display(), "descend target is no longer a directory");
            self.notice = Some(format!("{} is no longer a directory", entry.name));
            self.refresh();
        }
    }

    /// Go to the parent directory, putting the cursor back on the directory
    /// we came out of. Returns false when there is no parent to go to.
    fn ascend(&mut self) -> bool {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return false;
        };

        let departed = self.current_dir.clone();
        if self.enter_dir(parent) {
            let came_from = self.rows.iter().position(|row| {
                matches!(row.kind, RowKind::Entry(i) if self.entries[i].path == departed)
            });
            if let Some(pos) = came_from {
                self.selected = pos;
            }
        }
        true
    }

    /// Re-list the current directory, keeping the cursor position.
    fn refresh(&mut self) {
        let keep = self.selected;
        let current = self.current_dir.clone();
        if self.enter_dir(current) {
            self.selected = keep.min(self.rows.len().saturating_sub(1));
        }
    }

    /// Switch the view to `path`. The path and its listing change together:
    /// on failure a notice is shown and the previous view is kept.
    fn enter_dir(&mut self, path: PathBuf) -> bool {
        match fs::load_entries(&path, self.folders_only) {
            Ok(entries) => {
                debug!(path = %path.display(), count = entries.len(), "entered directory");
                self.current_dir = path;
                self.entries = entries;
                self.rows = build_rows(&self.entries, self.can_go_up(), self.icons);
                self.selected = 0;
                self.sync_list_state();
                true
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to list directory");
                self.notice = Some(format!("Cannot open {}: {}", path.display(), err));
                false
            }
        }
    }

    fn sync_list_state(&mut self) {
        if self.rows.is_empty() {
            self.state.select(None);
        } else {
            self.selected = self.selected.min(self.rows.len() - 1);
            self.state.select(Some(self.selected));
        }
    }

    /// Draw the dialog.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());

        let header = Paragraph::new(self.current_dir.display().to_string()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.mode.title()),
        );
        f.render_widget(header, layout.header);

        let title = format!(" {} ", tail_path(&self.current_dir, 3));
        render_entry_list(f, layout.list, &title, &self.rows, &mut self.state);

        render_status_bar(f, layout.status, self.notice.as_deref(), self.mode);
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(std::path::MAIN_SEPARATOR_STR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::fs::File;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        dir
    }

    fn picker_at(mode: PickerMode, start: &Path) -> Picker {
        Picker::new(mode, Some(start.to_path_buf()), &Config::default())
    }

    fn select_label(picker: &mut Picker, label: &str) {
        picker.selected = picker
            .rows
            .iter()
            .position(|r| r.label == label)
            .unwrap_or_else(|| panic!("no row labelled {label}"));
    }

    #[test]
    fn listing_is_sorted_with_parent_row_first() {
        let dir = setup_test_dir();
        let picker = picker_at(PickerMode::File, dir.path());

        let labels: Vec<&str> = picker.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["..", "docs", "a.txt", "b.txt"]);
        assert!(picker.notice.is_none());
    }

    #[test]
    fn invalid_start_falls_back_to_root_with_notice() {
        let dir = setup_test_dir();
        let file = dir.path().join("a.txt");
        let picker = picker_at(PickerMode::File, &file);

        assert_eq!(picker.current_dir, default_root());
        let notice = picker.notice.as_deref().unwrap();
        assert!(notice.contains("not a valid directory"));
    }

    #[test]
    fn missing_start_falls_back_to_root() {
        let picker = Picker::new(PickerMode::File, None, &Config::default());
        assert_eq!(picker.current_dir, default_root());
    }

    #[test]
    fn descend_then_ascend_round_trips() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::File, dir.path());
        let origin = picker.current_dir.clone();

        select_label(&mut picker, "docs");
        assert!(picker.on_key(key(KeyCode::Enter)).is_none());
        assert_eq!(picker.current_dir, dir.path().join("docs"));

        assert!(picker.on_key(key(KeyCode::Left)).is_none());
        assert_eq!(picker.current_dir, origin);

        // The cursor lands back on the directory we came out of.
        assert_eq!(picker.rows[picker.selected].label, "docs");
    }

    #[test]
    fn parent_row_ascends() {
        let dir = setup_test_dir();
        let sub = dir.path().join("docs");
        let mut picker = picker_at(PickerMode::File, &sub);

        select_label(&mut picker, "..");
        assert!(picker.on_key(key(KeyCode::Enter)).is_none());
        assert_eq!(picker.current_dir, dir.path());
    }

    #[cfg(unix)]
    #[test]
    fn back_at_root_cancels() {
        let mut picker = picker_at(PickerMode::File, Path::new("/"));
        assert!(!picker.can_go_up());
        // No parent row is offered at the root.
        assert!(picker.rows.iter().all(|r| r.kind != RowKind::Parent));

        let outcome = picker.on_key(key(KeyCode::Left));
        assert_eq!(outcome, Some(Outcome::Cancelled));
    }

    #[test]
    fn file_activation_selects_in_file_mode() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::File, dir.path());

        select_label(&mut picker, "a.txt");
        let outcome = picker.on_key(key(KeyCode::Enter));
        assert_eq!(
            outcome,
            Some(Outcome::Selected(dir.path().join("a.txt")))
        );
    }

    #[test]
    fn file_rows_are_inert_in_folder_mode() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::Folder, dir.path());

        select_label(&mut picker, "a.txt");
        assert!(picker.on_key(key(KeyCode::Enter)).is_none());
        assert_eq!(picker.current_dir, dir.path());
    }

    #[test]
    fn confirm_accepts_current_directory_in_folder_mode() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::Folder, dir.path());

        select_label(&mut picker, "docs");
        assert!(picker.on_key(key(KeyCode::Enter)).is_none());

        let outcome = picker.on_key(key(KeyCode::Char('s')));
        assert_eq!(
            outcome,
            Some(Outcome::Selected(dir.path().join("docs")))
        );
    }

    #[test]
    fn confirm_does_nothing_in_file_mode() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::File, dir.path());
        assert!(picker.on_key(key(KeyCode::Char('s'))).is_none());
    }

    #[test]
    fn cancel_key_cancels() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::File, dir.path());
        assert_eq!(
            picker.on_key(key(KeyCode::Esc)),
            Some(Outcome::Cancelled)
        );
    }

    #[test]
    fn stale_descend_is_refused_and_listing_refreshed() {
        let dir = setup_test_dir();
        let ghost = dir.path().join("ghost");
        std::fs::create_dir(&ghost).unwrap();

        let mut picker = picker_at(PickerMode::File, dir.path());
        select_label(&mut picker, "ghost");

        // The directory vanishes after it was listed.
        std::fs::remove_dir(&ghost).unwrap();

        assert!(picker.on_key(key(KeyCode::Enter)).is_none());
        assert_eq!(picker.current_dir, dir.path());
        assert!(picker.notice.as_deref().unwrap().contains("ghost"));
        assert!(picker.rows.iter().all(|r| r.label != "ghost"));
    }

    #[cfg(unix)]
    #[test]
    fn inaccessible_directory_keeps_prior_view() {
        use std::os::unix::fs::PermissionsExt;

        let dir = setup_test_dir();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        if std::fs::read_dir(&locked).is_ok() {
            // Permissions are not enforced for root; nothing to test.
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut picker = picker_at(PickerMode::File, dir.path());
        let rows_before = picker.rows.clone();
        select_label(&mut picker, "locked");

        assert!(picker.on_key(key(KeyCode::Enter)).is_none());

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(picker.current_dir, dir.path());
        assert_eq!(picker.rows, rows_before);
        assert!(picker.notice.is_some());
    }

    #[test]
    fn notice_is_dismissed_by_the_next_key() {
        let dir = setup_test_dir();
        let file = dir.path().join("a.txt");
        let mut picker = picker_at(PickerMode::File, &file);
        assert!(picker.notice.is_some());

        picker.on_key(key(KeyCode::Down));
        assert!(picker.notice.is_none());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let dir = setup_test_dir();
        let mut picker = picker_at(PickerMode::File, dir.path());

        for _ in 0..20 {
            picker.on_key(key(KeyCode::Down));
        }
        assert_eq!(picker.selected, picker.rows.len() - 1);

        picker.on_key(key(KeyCode::Home));
        assert_eq!(picker.selected, 0);

        picker.on_key(key(KeyCode::End));
        assert_eq!(picker.selected, picker.rows.len() - 1);
    }
}
