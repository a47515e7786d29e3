// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, path::PathBuf};

const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Load environment variables from a `.env` file, if present.
///
/// Must be invoked before logging is initialized.
pub(crate) fn init_environment() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

pub(crate) fn parse_database_url() -> Option<String> {
    let var = env::var(DATABASE_URL_ENV).ok()?;
    log::debug!("{DATABASE_URL_ENV} = {var}");
    if var.trim().is_empty() {
        return None;
    }
    Some(var)
}
