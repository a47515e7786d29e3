// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{num::ParseIntError, str::FromStr};

use semval::prelude::*;

pub mod parse;

/// Placeholder for header fields that have never been declared.
pub const UNKNOWN_HEADER_VALUE: &str = "Unknown";

/// Start-of-record marker, i.e. the reference number field.
pub(crate) const REFERENCE_NUMBER_PREFIX: &str = "X:";

pub(crate) const TITLE_PREFIX: &str = "T:";

pub(crate) const RHYTHM_PREFIX: &str = "R:";

pub(crate) const KEY_SIGNATURE_PREFIX: &str = "K:";

/// Identifies the collection a tune has been imported from.
///
/// Usually the number of the book folder that contains the file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct BookId(i64);

impl BookId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        let Self(value) = self;
        value
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A single tune, extracted from an ABC file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TuneRecord {
    pub book_id: BookId,

    /// The value of the `X:` field that started this record.
    pub reference_number: String,

    /// The first `T:` field.
    pub title: String,

    /// The last `R:` field.
    pub rhythm: String,

    /// The last `K:` field.
    pub key_signature: String,

    /// All non-blank lines of this record, trimmed and terminated by `\n`.
    pub content: String,
}

impl TuneRecord {
    /// The start-of-record marker line, i.e. the first line of the content.
    #[must_use]
    pub fn marker_line(&self) -> Option<&str> {
        self.content.lines().next()
    }
}

/// Returns the trimmed value after the first colon.
pub(crate) fn field_value(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, value)| value.trim())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TuneRecordInvalidity {
    ContentWithoutMarker,
    ReferenceNumberMismatch,
}

impl Validate for TuneRecord {
    type Invalidity = TuneRecordInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let marker_line = self
            .marker_line()
            .filter(|line| line.starts_with(REFERENCE_NUMBER_PREFIX));
        ValidationContext::new()
            .invalidate_if(
                marker_line.is_none(),
                Self::Invalidity::ContentWithoutMarker,
            )
            .invalidate_if(
                marker_line.is_some_and(|line| field_value(line) != self.reference_number),
                Self::Invalidity::ReferenceNumberMismatch,
            )
            .into()
    }
}
