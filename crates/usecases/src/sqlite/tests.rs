// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use tunebook_core::BookId;
use tunebook_repo::tune::{EntityRepo as _, StringField, StringFilter};

use super::*;

#[test]
fn migrate_schema_twice() -> anyhow::Result<()> {
    let mut database = Database::open_and_migrate(Storage::InMemory)?;
    database.migrate_schema()?;
    assert_eq!(0, database.repo().count_tunes()?);
    database.close();
    Ok(())
}

#[test]
fn import_into_file_database_and_reopen() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    let book_dir = root_dir.path().join("books").join("5");
    std::fs::create_dir_all(&book_dir)?;
    std::fs::write(
        book_dir.join("tunes.abc"),
        "X:1\nT:A\nR:reel\nK:D\nabc|\nX:2\nT:B\n",
    )?;
    let storage = Storage::File {
        path: root_dir.path().join("tunes.sqlite"),
    };

    let mut database = Database::open_and_migrate(storage.clone())?;
    let outcome =
        database.import_tune_books(&root_dir.path().join("books"), &Default::default())?;
    assert_eq!(2, outcome.total_tunes());
    database.close();

    let mut database = Database::open_and_migrate(storage)?;
    let mut repo = database.repo();
    assert_eq!(2, repo.count_tunes()?);
    let mut records = Vec::new();
    repo.load_tunes_by_book(BookId::new(5), &mut records)?;
    assert_eq!(
        vec!["A", "B"],
        records
            .iter()
            .map(|(_, record)| record.tune.title.as_str())
            .collect::<Vec<_>>()
    );

    records.clear();
    repo.search_tunes(
        &StringFilter {
            field: StringField::Rhythm,
            contains: "REEL".to_owned(),
        },
        &mut records,
    )?;
    assert_eq!(1, records.len());
    database.cleanse(true)?;
    database.close();
    Ok(())
}

#[test]
fn import_fails_for_missing_root_directory() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    let mut database = Database::open_and_migrate(Storage::InMemory)?;
    let result =
        database.import_tune_books(&root_dir.path().join("missing"), &Default::default());
    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(0, database.repo().count_tunes()?);
    Ok(())
}
