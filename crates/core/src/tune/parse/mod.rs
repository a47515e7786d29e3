// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Splitting the text of an ABC file into tune records.
//!
//! A record starts with an `X:` line and extends until the next `X:` line
//! or the end of the input. Only the reference number, title, rhythm and
//! key are extracted. All other lines are kept in the raw content.
//!
//! The parser never fails. Lines that it does not understand are either
//! retained as opaque content or discarded if they appear before the
//! first record.

use semval::IsValid as _;

use super::{
    BookId, KEY_SIGNATURE_PREFIX, REFERENCE_NUMBER_PREFIX, RHYTHM_PREFIX, TITLE_PREFIX,
    TuneRecord, UNKNOWN_HEADER_VALUE, field_value,
};

/// Parse all tune records from the text of a single file.
///
/// Lines may be terminated by `\n`, `\r\n` or a bare `\r`.
#[must_use]
pub fn parse(text: &str, book_id: BookId) -> Vec<TuneRecord> {
    let mut parser = TuneRecordParser::new(book_id);
    // Empty pieces between `\r` and `\n` are skipped as blank lines
    for line in text.split(['\n', '\r']) {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Accumulates a single record until it is finalized.
#[derive(Debug)]
struct TuneRecordBuilder {
    book_id: BookId,
    reference_number: String,
    title: Option<String>,
    rhythm: Option<String>,
    key_signature: Option<String>,
    lines: Vec<String>,
}

impl TuneRecordBuilder {
    fn start(book_id: BookId, marker_line: &str) -> Self {
        Self {
            book_id,
            reference_number: field_value(marker_line).to_owned(),
            title: None,
            rhythm: None,
            key_signature: None,
            lines: vec![marker_line.to_owned()],
        }
    }

    fn add_line(&mut self, line: &str) {
        if line.starts_with(TITLE_PREFIX) {
            // The first title wins
            if self.title.is_none() {
                self.title = Some(field_value(line).to_owned());
            }
        } else if line.starts_with(RHYTHM_PREFIX) {
            self.rhythm = Some(field_value(line).to_owned());
        } else if line.starts_with(KEY_SIGNATURE_PREFIX) {
            self.key_signature = Some(field_value(line).to_owned());
        }
        self.lines.push(line.to_owned());
    }

    fn build(self) -> TuneRecord {
        let Self {
            book_id,
            reference_number,
            title,
            rhythm,
            key_signature,
            lines,
        } = self;
        let content_len = lines.iter().map(|line| line.len() + 1).sum();
        let content = lines
            .into_iter()
            .fold(String::with_capacity(content_len), |mut content, line| {
                content.push_str(&line);
                content.push('\n');
                content
            });
        let unknown = || UNKNOWN_HEADER_VALUE.to_owned();
        TuneRecord {
            book_id,
            reference_number,
            title: title.unwrap_or_else(unknown),
            rhythm: rhythm.unwrap_or_else(unknown),
            key_signature: key_signature.unwrap_or_else(unknown),
            content,
        }
    }
}

/// Single pass, line-by-line parser for the text of one file.
///
/// Feed all lines with [`feed_line()`](Self::feed_line) and then
/// collect the records with [`finish()`](Self::finish).
#[derive(Debug)]
pub struct TuneRecordParser {
    book_id: BookId,
    current: Option<TuneRecordBuilder>,
    records: Vec<TuneRecord>,
}

impl TuneRecordParser {
    #[must_use]
    pub const fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            current: None,
            records: Vec::new(),
        }
    }

    /// Whether a record is under construction.
    #[must_use]
    pub const fn is_inside_record(&self) -> bool {
        self.current.is_some()
    }

    /// Number of records that have already been finalized.
    #[must_use]
    pub fn finished_records(&self) -> usize {
        self.records.len()
    }

    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if line.starts_with(REFERENCE_NUMBER_PREFIX) {
            self.finish_current();
            self.current = Some(TuneRecordBuilder::start(self.book_id, line));
            return;
        }
        // Lines before the first record are dropped
        if let Some(current) = &mut self.current {
            current.add_line(line);
        }
    }

    #[must_use]
    pub fn finish(mut self) -> Vec<TuneRecord> {
        self.finish_current();
        let Self { records, .. } = self;
        records
    }

    fn finish_current(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };
        let record = current.build();
        debug_assert!(record.is_valid());
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests;
