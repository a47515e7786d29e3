// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use diesel::dsl::count_star;

use tunebook_core::{BookId, TuneRecord, util::clock::UtcDateTimeMs};
use tunebook_repo::tune::*;

use crate::{
    db::tune::{models::*, schema::*},
    prelude::*,
    util::{LIKE_ESCAPE_CHARACTER, escape_like_contains},
};

fn collect_queried_records(records: Vec<QueryableRecord>, collector: &mut TuneCollector) {
    collector.reserve(records.len());
    for record in records {
        let (header, record) = record.into();
        collector.collect(header, record);
    }
}

impl EntityRepo for crate::Connection<'_> {
    fn insert_tune(
        &mut self,
        created_at: UtcDateTimeMs,
        source_path: Option<&Path>,
        record: &TuneRecord,
    ) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(created_at, source_path, record);
        let query = diesel::insert_into(tune::table)
            .values(&insertable)
            .returning(tune::row_id);
        let row_id = query
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        Ok(row_id.into())
    }

    fn load_tune(&mut self, id: RecordId) -> RepoResult<(RecordHeader, TuneWithSource)> {
        tune::table
            .filter(tune::row_id.eq(RowId::from(id)))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .map(Into::into)
    }

    fn load_tunes_by_book(
        &mut self,
        book_id: BookId,
        collector: &mut TuneCollector,
    ) -> RepoResult<()> {
        let records = tune::table
            .filter(tune::book_id.eq(book_id.value()))
            .order_by(tune::row_id)
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collect_queried_records(records, collector);
        Ok(())
    }

    fn search_tunes(
        &mut self,
        filter: &StringFilter,
        collector: &mut TuneCollector,
    ) -> RepoResult<()> {
        let StringFilter { field, contains } = filter;
        // LIKE is case-insensitive for ASCII characters
        let pattern = escape_like_contains(contains);
        let query = tune::table.order_by(tune::row_id).into_boxed();
        let query = match field {
            StringField::Title => {
                query.filter(tune::title.like(pattern).escape(LIKE_ESCAPE_CHARACTER))
            }
            StringField::Rhythm => {
                query.filter(tune::rhythm.like(pattern).escape(LIKE_ESCAPE_CHARACTER))
            }
            StringField::KeySignature => {
                query.filter(tune::key_signature.like(pattern).escape(LIKE_ESCAPE_CHARACTER))
            }
        };
        let records = query
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collect_queried_records(records, collector);
        Ok(())
    }

    fn count_tunes(&mut self) -> RepoResult<u64> {
        let count = tune::table
            .select(count_star())
            .first::<i64>(self.as_mut())
            .map_err(repo_error)?;
        u64::try_from(count).map_err(|err| anyhow::Error::from(err).into())
    }
}
