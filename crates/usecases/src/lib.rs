// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::result::Result as StdResult;

use thiserror::Error;

use tunebook_abc_file::Error as AbcFileError;
use tunebook_repo::RepoError;

#[cfg(feature = "sqlite")]
use tunebook_storage_sqlite::Error as StorageError;

pub mod tune;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    DatabaseMigration(anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AbcFileError> for Error {
    fn from(err: AbcFileError) -> Self {
        match err {
            AbcFileError::Io(err) => Self::Io(err),
            AbcFileError::Other(err) => Self::Other(err),
        }
    }
}

pub type Result<T> = StdResult<T, Error>;
