// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod tune;
pub use self::tune::{
    BookId, TuneRecord, TuneRecordInvalidity, UNKNOWN_HEADER_VALUE,
    parse::{TuneRecordParser, parse},
};

pub mod util;

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IsValid as _, Validate as _};

    pub use crate::util::clock::*;
}
