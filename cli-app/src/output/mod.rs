// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{io::Write, path::Path};

use serde::Serialize;

use tunebook::{
    TuneRecord,
    repo::tune::{RecordHeader, TuneWithSource},
    util::clock::UtcDateTimeMs,
};

#[derive(Debug, Serialize)]
struct TuneItem<'a> {
    id: i64,
    created_at: UtcDateTimeMs,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_path: Option<&'a Path>,
    #[serde(flatten)]
    tune: &'a TuneRecord,
}

impl<'a> From<&'a (RecordHeader, TuneWithSource)> for TuneItem<'a> {
    fn from(from: &'a (RecordHeader, TuneWithSource)) -> Self {
        let (header, record) = from;
        Self {
            id: header.id.to_inner(),
            created_at: header.created_at,
            source_path: record.source_path.as_deref(),
            tune: &record.tune,
        }
    }
}

/// One line per tune with tab-separated header fields.
pub(crate) fn write_tunes_text(
    writer: &mut impl Write,
    records: &[(RecordHeader, TuneWithSource)],
) -> anyhow::Result<()> {
    for (header, record) in records {
        let TuneRecord {
            book_id,
            reference_number,
            title,
            rhythm,
            key_signature,
            content: _,
        } = &record.tune;
        writeln!(
            writer,
            "{id}\t{book_id}\tX:{reference_number}\t{title}\t{rhythm}\t{key_signature}",
            id = header.id
        )?;
    }
    Ok(())
}

pub(crate) fn write_tunes_json(
    writer: &mut impl Write,
    records: &[(RecordHeader, TuneWithSource)],
) -> anyhow::Result<()> {
    let items = records.iter().map(TuneItem::from).collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *writer, &items)?;
    writeln!(writer)?;
    Ok(())
}

pub(crate) fn print_tunes(
    records: &[(RecordHeader, TuneWithSource)],
    json: bool,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        write_tunes_json(&mut stdout, records)
    } else {
        write_tunes_text(&mut stdout, records)
    }
}
