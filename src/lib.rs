// src/lib.rs
//! Dirpick - a terminal file and folder picker dialog.
//!
//! This library provides a small ratatui dialog that browses the local
//! filesystem and hands the chosen path back to the caller. Two variants
//! share all internals: [`pick_file`] ends when a file row is activated,
//! [`pick_folder`] when the current directory is explicitly confirmed.

pub mod app;
pub mod config;
pub mod fs;
pub mod ui;

use std::path::PathBuf;

use anyhow::Result;

pub use app::{Outcome, Picker, PickerMode};

/// Run the file-select dialog, starting at `start` when it is an accessible
/// directory (the filesystem root otherwise).
pub fn pick_file(start: Option<PathBuf>) -> Result<Outcome> {
    run_dialog(PickerMode::File, start)
}

/// Run the folder-select dialog. Rows only navigate; the confirm key
/// accepts the directory currently being viewed.
pub fn pick_folder(start: Option<PathBuf>) -> Result<Outcome> {
    run_dialog(PickerMode::Folder, start)
}

fn run_dialog(mode: PickerMode, start: Option<PathBuf>) -> Result<Outcome> {
    let config = config::Config::load();
    let mut picker = Picker::new(mode, start, &config);
    ui::run(&mut picker)
}
