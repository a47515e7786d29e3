// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use tunebook_core::{BookId, TuneRecord, util::clock::UtcDateTimeMs};

use crate::prelude::*;

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

/// A stored tune together with the file it has been imported from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneWithSource {
    pub source_path: Option<PathBuf>,
    pub tune: TuneRecord,
}

pub type TuneCollector =
    dyn ReservableRecordCollector<Header = RecordHeader, Record = TuneWithSource>;

/// Text fields that could be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringField {
    Title,
    Rhythm,
    KeySignature,
}

/// Case-insensitive substring match on a single text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringFilter {
    pub field: StringField,
    pub contains: String,
}

pub trait EntityRepo {
    /// Append a single record.
    ///
    /// The row is committed before returning.
    fn insert_tune(
        &mut self,
        created_at: UtcDateTimeMs,
        source_path: Option<&Path>,
        record: &TuneRecord,
    ) -> RepoResult<RecordId>;

    fn load_tune(&mut self, id: RecordId) -> RepoResult<(RecordHeader, TuneWithSource)>;

    /// Load all tunes of a book in insertion order.
    fn load_tunes_by_book(
        &mut self,
        book_id: BookId,
        collector: &mut TuneCollector,
    ) -> RepoResult<()>;

    /// Search tunes in insertion order.
    fn search_tunes(
        &mut self,
        filter: &StringFilter,
        collector: &mut TuneCollector,
    ) -> RepoResult<()>;

    fn count_tunes(&mut self) -> RepoResult<u64>;
}
