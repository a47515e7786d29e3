// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use tunebook_abc_file::fs::{
    book_id_from_file_path, read_file_text,
    visit::{Progress as WalkProgress, visit_files},
};
use tunebook_core::{parse, util::clock::UtcDateTimeMs};
use tunebook_repo::tune::EntityRepo;

use crate::{Error, Result};

pub use tunebook_abc_file::fs::visit::Params;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilesSummary {
    /// Files with a recognized extension
    pub visited: usize,

    /// Files without a book id in their parent directory name
    pub skipped: usize,

    /// Files that could not be read
    pub failed: usize,

    /// Files that have been parsed
    pub finished: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TunesSummary {
    pub inserted: usize,
    pub failed: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files: FilesSummary,
    pub tunes: TunesSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub root_path: PathBuf,
    pub elapsed: Duration,
    pub walk: WalkProgress,
    pub summary: Summary,
}

impl Outcome {
    /// The number of tunes that have been stored.
    #[must_use]
    pub const fn total_tunes(&self) -> usize {
        self.summary.tunes.inserted
    }
}

/// Import a single tune book file.
///
/// Read failures and insert failures are logged and counted, they
/// never abort the import.
pub fn import_tune_book_file<Repo: EntityRepo>(
    repo: &mut Repo,
    file_path: &Path,
    summary: &mut Summary,
) {
    summary.files.visited += 1;
    let Some(book_id) = book_id_from_file_path(file_path) else {
        log::warn!(
            "Skipping file without book id in parent directory name: {path}",
            path = file_path.display()
        );
        summary.files.skipped += 1;
        return;
    };
    let text = match read_file_text(file_path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!(
                "Failed to read file {path}: {err}",
                path = file_path.display()
            );
            summary.files.failed += 1;
            return;
        }
    };
    let created_at = UtcDateTimeMs::now();
    let records = parse(&text, book_id);
    log::debug!(
        "Parsed {count} tune(s) of book {book_id} from file {path}",
        count = records.len(),
        path = file_path.display()
    );
    for record in &records {
        match repo.insert_tune(created_at, Some(file_path), record) {
            Ok(id) => {
                log::debug!(
                    "Inserted tune X:{reference_number} as {id}",
                    reference_number = record.reference_number
                );
                summary.tunes.inserted += 1;
            }
            Err(err) => {
                log::warn!(
                    "Failed to insert tune X:{reference_number} from file {path}: {err}",
                    reference_number = record.reference_number,
                    path = file_path.display()
                );
                summary.tunes.failed += 1;
            }
        }
    }
    summary.files.finished += 1;
}

/// Import all tune books below the root directory.
///
/// Only fails if the root directory could not be accessed.
pub fn import_tune_books<Repo: EntityRepo>(
    repo: &mut Repo,
    root_path: &Path,
    params: &Params,
) -> Result<Outcome> {
    log::info!(
        "Importing tune books from directory: {path}",
        path = root_path.display()
    );
    let started_at = Instant::now();
    let mut summary = Summary::default();
    let walk = visit_files::<Error, _>(root_path, params, &mut |file_path| {
        import_tune_book_file(repo, file_path, &mut summary);
        Ok(())
    })?;
    let elapsed = started_at.elapsed();
    log::info!(
        "Imported {inserted} tune(s) from {finished} file(s) in {elapsed_ms} ms",
        inserted = summary.tunes.inserted,
        finished = summary.files.finished,
        elapsed_ms = elapsed.as_millis()
    );
    if summary.files.skipped + summary.files.failed + summary.tunes.failed > 0 {
        log::warn!(
            "Skipped {skipped} and failed to read {failed} file(s), failed to insert \
             {failed_tunes} tune(s)",
            skipped = summary.files.skipped,
            failed = summary.files.failed,
            failed_tunes = summary.tunes.failed
        );
    }
    Ok(Outcome {
        root_path: root_path.to_path_buf(),
        elapsed,
        walk,
        summary,
    })
}
