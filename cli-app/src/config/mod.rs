// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use tunebook::{
    abc_file::fs::visit::Params as VisitParams,
    storage_sqlite::connection::{Config as DatabaseConnectionConfig, Storage},
    usecases::tune::import::Params as ImportParams,
};

pub(crate) const DEFAULT_DATABASE_FILE: &str = "tunes.sqlite";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) database: DatabaseConfig,
    pub(crate) import: ImportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseConfig {
    pub(crate) connection: DatabaseConnectionConfig,
    pub(crate) migrate_schema_on_startup: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection: DatabaseConnectionConfig {
                storage: Storage::File {
                    path: PathBuf::from(DEFAULT_DATABASE_FILE),
                },
            },
            migrate_schema_on_startup: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ImportConfig {
    pub(crate) file_extensions: Vec<String>,
    pub(crate) max_depth: Option<usize>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        let VisitParams {
            file_extensions,
            max_depth,
        } = VisitParams::default();
        Self {
            file_extensions,
            max_depth,
        }
    }
}

impl From<&ImportConfig> for ImportParams {
    fn from(from: &ImportConfig) -> Self {
        let ImportConfig {
            file_extensions,
            max_depth,
        } = from;
        Self {
            file_extensions: file_extensions.clone(),
            max_depth: *max_depth,
        }
    }
}

impl Config {
    /// Override the database location, e.g. from the command line.
    pub(crate) fn patch_database_url(&mut self, database_url: &str) {
        let storage = Storage::from(database_url.to_owned());
        log::debug!("Patching database storage: {storage}");
        self.database.connection.storage = storage;
    }
}

pub(crate) fn load_config_file(file_path: &Path) -> anyhow::Result<Config> {
    log::info!(
        "Loading configuration from file: {path}",
        path = file_path.display()
    );
    let text = std::fs::read_to_string(file_path)
        .with_context(|| format!("reading configuration file {}", file_path.display()))?;
    parse_config(&text)
        .with_context(|| format!("parsing configuration file {}", file_path.display()))
}

pub(crate) fn parse_config(text: &str) -> anyhow::Result<Config> {
    ron::de::from_str(text).map_err(Into::into)
}

#[cfg(test)]
mod tests;
