// src/fs/browser.rs
//! Directory listing and ordering for the picker.

use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
};

/// Snapshot of one directory entry at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Read the immediate children of `dir`, sorted directories-first.
///
/// An unreadable directory is an error, never an empty listing — callers
/// must be able to tell the two apart. With `folders_only` set, plain files
/// are dropped from the listing.
pub fn load_entries(dir: &Path, folders_only: bool) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Fresh metadata, following symlinks: a link to a directory
        // navigates like a directory.
        let is_dir = path.is_dir();

        if folders_only && !is_dir {
            continue;
        }

        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Order entries with directories before files, then byte-wise name order
/// within each group. Case-sensitive, stable.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
}

/// Last `n` components of `path`, for compact titles.
pub fn tail_path(path: &Path, n: usize) -> String {
    let components: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if components.len() <= n {
        path.display().to_string()
    } else {
        format!(
            "…/{}",
            components[components.len() - n..].join(std::path::MAIN_SEPARATOR_STR)
        )
    }
}
