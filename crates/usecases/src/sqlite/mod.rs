// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Lifecycle of an SQLite database: open, migrate, use, close.

use std::path::Path;

use tunebook_repo_sqlite::{Connection, DbConnection, initialize_database, run_migrations};
use tunebook_storage_sqlite::{
    Error as StorageError, cleanse_database,
    connection::{Storage, establish_connection},
};

use crate::{
    Error, Result,
    tune::import::{Outcome as ImportOutcome, Params as ImportParams, import_tune_books},
};

pub fn migrate_schema(connection: &mut DbConnection) -> Result<()> {
    for migration_version in run_migrations(connection)
        .map_err(|err| anyhow::anyhow!(err))
        .map_err(Error::DatabaseMigration)?
    {
        log::info!("Applied migration '{migration_version}'");
    }
    Ok(())
}

/// An open database.
///
/// Dropping the database closes the connection. Use [`Database::close()`]
/// to make this explicit.
#[allow(missing_debug_implementations)]
pub struct Database {
    storage: Storage,
    connection: DbConnection,
}

impl Database {
    /// Open and configure the database.
    ///
    /// The schema is not touched, see [`Database::migrate_schema()`].
    pub fn open(storage: Storage) -> Result<Self> {
        log::info!("Opening database: {storage}");
        let mut connection = establish_connection(&storage)?;
        initialize_database(&mut connection).map_err(StorageError::from)?;
        Ok(Self {
            storage,
            connection,
        })
    }

    /// Open the database and create or upgrade the schema.
    pub fn open_and_migrate(storage: Storage) -> Result<Self> {
        let mut database = Self::open(storage)?;
        database.migrate_schema()?;
        Ok(database)
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Create the schema if absent.
    ///
    /// Idempotent.
    pub fn migrate_schema(&mut self) -> Result<()> {
        migrate_schema(&mut self.connection)
    }

    /// Borrow the repository for accessing records.
    pub fn repo(&mut self) -> Connection<'_> {
        Connection::new(&mut self.connection)
    }

    pub fn import_tune_books(
        &mut self,
        root_path: &Path,
        params: &ImportParams,
    ) -> Result<ImportOutcome> {
        import_tune_books(&mut self.repo(), root_path, params)
    }

    pub fn cleanse(&mut self, vacuum: bool) -> Result<()> {
        cleanse_database(&mut self.connection, vacuum).map_err(Into::into)
    }

    pub fn close(self) {
        let Self {
            storage,
            connection,
        } = self;
        drop(connection);
        log::info!("Closed database: {storage}");
    }
}

#[cfg(test)]
mod tests;
