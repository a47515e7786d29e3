// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    io::{Error as IoError, ErrorKind},
    ops::Not as _,
    path::Path,
    result::Result as StdResult,
};

use walkdir::{DirEntry, WalkDir};

use crate::Error;

use super::{DEFAULT_FILE_EXTENSION, has_file_extension};

const HIDDEN_DIR_NAMES: [&str; 2] = [".DS_Store", ".git"];

fn is_hidden_dir_entry(dir_entry: &DirEntry) -> bool {
    if dir_entry.file_type().is_dir() {
        return dir_entry
            .file_name()
            .to_str()
            .is_some_and(|dir_name| HIDDEN_DIR_NAMES.contains(&dir_name));
    }
    false
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Recognized file extensions, compared case-insensitively
    pub file_extensions: Vec<String>,

    /// Limits the recursion, unlimited if `None`
    pub max_depth: Option<usize>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            file_extensions: vec![DEFAULT_FILE_EXTENSION.to_owned()],
            max_depth: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Progress {
    pub entries: EntriesProgress,
    pub directories: DirectoriesProgress,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntriesProgress {
    /// Unreadable entries and files with unrecognized extensions
    pub skipped: usize,

    /// Files that have been passed to the visitor
    pub finished: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectoriesProgress {
    pub finished: usize,
}

/// Visit all files with a recognized extension below the root directory
///
/// Siblings are visited in file name order, depth-first. Hidden
/// directories are not entered. Entries that could not be read are
/// logged and skipped.
///
/// Fails if the root path is not an accessible directory or if the
/// visitor fails.
pub fn visit_files<E, VisitFileFn>(
    root_path: &Path,
    params: &Params,
    visit_file_fn: &mut VisitFileFn,
) -> StdResult<Progress, E>
where
    E: From<Error>,
    VisitFileFn: FnMut(&Path) -> StdResult<(), E>,
{
    let Params {
        file_extensions,
        max_depth,
    } = params;
    let metadata = std::fs::metadata(root_path).map_err(Error::from)?;
    if !metadata.is_dir() {
        let err = IoError::new(
            ErrorKind::NotADirectory,
            format!("not a directory: {path}", path = root_path.display()),
        );
        return Err(Error::from(err).into());
    }
    let mut progress = Progress::default();
    let mut walkdir = WalkDir::new(root_path)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(0);
    if let Some(max_depth) = max_depth {
        walkdir = walkdir.max_depth(*max_depth);
    }
    for dir_entry in walkdir
        .into_iter()
        .filter_entry(|e| is_hidden_dir_entry(e).not())
    {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(err) => {
                if let Some(loop_ancestor) = err.loop_ancestor() {
                    log::info!(
                        "Cycle detected while visiting directory: {path}",
                        path = loop_ancestor.display()
                    );
                } else if let Some(path) = err.path() {
                    log::warn!(
                        "Skipping unreadable entry {path}: {err}",
                        path = path.display()
                    );
                } else {
                    log::warn!("Skipping unreadable entry: {err}");
                }
                progress.entries.skipped += 1;
                continue;
            }
        };
        // Checking for `is_dir()` is sufficient when following symlinks
        if dir_entry.file_type().is_dir() {
            log::debug!(
                "Entering directory: {path}",
                path = dir_entry.path().display()
            );
            progress.directories.finished += 1;
            continue;
        }
        if !has_file_extension(dir_entry.path(), file_extensions.as_slice()) {
            log::debug!(
                "Skipping file with unrecognized extension: {path}",
                path = dir_entry.path().display()
            );
            progress.entries.skipped += 1;
            continue;
        }
        visit_file_fn(dir_entry.path())?;
        progress.entries.finished += 1;
    }
    Ok(progress)
}

#[cfg(test)]
mod tests;
