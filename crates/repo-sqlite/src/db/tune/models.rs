// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use tunebook_core::{
    BookId, TuneRecord,
    util::clock::{TimestampMillis, UtcDateTimeMs},
};
use tunebook_repo::tune::{RecordHeader, TuneWithSource};

use super::{schema::*, *};

#[derive(Debug, Queryable, Identifiable)]
#[diesel(table_name = tune, primary_key(row_id))]
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) book_id: i64,
    pub(crate) reference_number: String,
    pub(crate) title: String,
    pub(crate) rhythm: String,
    pub(crate) key_signature: String,
    pub(crate) content: String,
    pub(crate) source_path: Option<String>,
}

impl From<QueryableRecord> for (RecordHeader, TuneWithSource) {
    fn from(from: QueryableRecord) -> Self {
        let QueryableRecord {
            row_id,
            row_created_ms,
            book_id,
            reference_number,
            title,
            rhythm,
            key_signature,
            content,
            source_path,
        } = from;
        let header = RecordHeader {
            id: row_id.into(),
            created_at: UtcDateTimeMs::from_unix_timestamp_millis(row_created_ms),
        };
        let tune = TuneRecord {
            book_id: BookId::new(book_id),
            reference_number,
            title,
            rhythm,
            key_signature,
            content,
        };
        let record = TuneWithSource {
            source_path: source_path.map(PathBuf::from),
            tune,
        };
        (header, record)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tune)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) book_id: i64,
    pub(crate) reference_number: &'a str,
    pub(crate) title: &'a str,
    pub(crate) rhythm: &'a str,
    pub(crate) key_signature: &'a str,
    pub(crate) content: &'a str,
    pub(crate) source_path: Option<String>,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(
        created_at: UtcDateTimeMs,
        source_path: Option<&Path>,
        record: &'a TuneRecord,
    ) -> Self {
        let TuneRecord {
            book_id,
            reference_number,
            title,
            rhythm,
            key_signature,
            content,
        } = record;
        Self {
            row_created_ms: created_at.unix_timestamp_millis(),
            book_id: book_id.value(),
            reference_number,
            title,
            rhythm,
            key_signature,
            content,
            // Non-UTF-8 paths are stored lossy
            source_path: source_path.map(|path| path.to_string_lossy().into_owned()),
        }
    }
}
