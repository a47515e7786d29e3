// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr};

use diesel::{Connection as _, SqliteConnection};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;

const IN_MEMORY_STORAGE: &str = ":memory:";

/// Location of the SQLite database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", from = "String"))]
pub enum Storage {
    #[default]
    InMemory,
    File { path: PathBuf },
}

impl Storage {
    #[must_use]
    pub fn connection_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => f.write_str(IN_MEMORY_STORAGE),
            Self::File { path } => write!(f, "{path}", path = path.display()),
        }
    }
}

impl FromStr for Storage {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == IN_MEMORY_STORAGE {
            return Ok(Self::InMemory);
        }
        Ok(Self::File { path: s.into() })
    }
}

impl From<String> for Storage {
    fn from(from: String) -> Self {
        match from.parse() {
            Ok(storage) => storage,
            Err(infallible) => match infallible {},
        }
    }
}

impl From<Storage> for String {
    fn from(from: Storage) -> Self {
        from.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub storage: Storage,
}

/// Open a new connection.
///
/// Database files that do not exist yet are created.
pub fn establish_connection(storage: &Storage) -> Result<SqliteConnection> {
    let connection_url = storage.connection_url();
    log::debug!("Establishing database connection: {connection_url}");
    let connection = SqliteConnection::establish(&connection_url)?;
    Ok(connection)
}
