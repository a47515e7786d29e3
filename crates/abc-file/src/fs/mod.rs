// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use tunebook_core::BookId;

use crate::Result;

pub mod visit;

/// The file extension of ABC tune books, without the leading dot.
pub const DEFAULT_FILE_EXTENSION: &str = "abc";

/// Infer the book id from the name of the immediate parent directory.
///
/// Returns `None` if the file has no parent directory or if the
/// directory name is not a decimal integer.
#[must_use]
pub fn book_id_from_file_path(file_path: &Path) -> Option<BookId> {
    let dir_name = file_path.parent()?.file_name()?.to_str()?;
    dir_name.parse().ok()
}

/// Check the file extension, ignoring case.
#[must_use]
pub fn has_file_extension<S: AsRef<str>>(file_path: &Path, file_extensions: &[S]) -> bool {
    let Some(extension) = file_path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    file_extensions
        .iter()
        .any(|expected| expected.as_ref().eq_ignore_ascii_case(extension))
}

/// Read the whole file as UTF-8 text.
///
/// Invalid UTF-8 is reported as an I/O error of kind
/// [`std::io::ErrorKind::InvalidData`].
pub fn read_file_text(file_path: &Path) -> Result<String> {
    std::fs::read_to_string(file_path).map_err(Into::into)
}
