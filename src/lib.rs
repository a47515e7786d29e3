// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Import ABC tune books into a relational database.
//!
//! The core parser is always available. Storage, directory traversal and
//! the import use case are enabled by features.

pub use tunebook_core::*;

pub mod prelude {
    pub use semval::prelude::*;
    pub use tunebook_core::prelude::*;
}

#[cfg(feature = "abc-file")]
pub mod abc_file {
    pub use tunebook_abc_file::*;
}

#[cfg(feature = "repo")]
pub mod repo {
    pub use tunebook_repo::*;
}

#[cfg(feature = "usecases")]
pub mod usecases {
    pub use tunebook_usecases::*;
}

#[cfg(feature = "sqlite")]
pub mod storage_sqlite {
    pub use tunebook_storage_sqlite::*;
}

#[cfg(feature = "sqlite")]
pub mod repo_sqlite {
    pub use tunebook_repo_sqlite::*;
}
