// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    tune (row_id) {
        row_id -> BigInt,
        row_created_ms -> BigInt,
        book_id -> BigInt,
        reference_number -> Text,
        title -> Text,
        rhythm -> Text,
        key_signature -> Text,
        content -> Text,
        source_path -> Nullable<Text>,
    }
}
