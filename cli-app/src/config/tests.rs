// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(
        Storage::File {
            path: PathBuf::from("tunes.sqlite")
        },
        config.database.connection.storage
    );
    assert!(config.database.migrate_schema_on_startup);
    assert_eq!(vec!["abc".to_owned()], config.import.file_extensions);
    assert_eq!(None, config.import.max_depth);
}

#[test]
fn parse_empty_config() -> anyhow::Result<()> {
    assert_eq!(Config::default(), parse_config("()")?);
    Ok(())
}

#[test]
fn parse_partial_config() -> anyhow::Result<()> {
    let config = parse_config(
        r#"(
    database: (
        connection: (
            storage: ":memory:",
        ),
    ),
    import: (
        max_depth: Some(3),
    ),
)"#,
    )?;
    assert_eq!(Storage::InMemory, config.database.connection.storage);
    assert!(config.database.migrate_schema_on_startup);
    assert_eq!(vec!["abc".to_owned()], config.import.file_extensions);
    assert_eq!(Some(3), config.import.max_depth);
    Ok(())
}

#[test]
fn parse_invalid_config() {
    assert!(parse_config("(database: 42)").is_err());
}

#[test]
fn patch_database_url() {
    let mut config = Config::default();
    config.patch_database_url(":memory:");
    assert_eq!(Storage::InMemory, config.database.connection.storage);
    config.patch_database_url("/var/lib/tunes.sqlite");
    assert_eq!(
        Storage::File {
            path: PathBuf::from("/var/lib/tunes.sqlite")
        },
        config.database.connection.storage
    );
}

#[test]
fn load_missing_config_file() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    assert!(load_config_file(&temp_dir.path().join("missing.ron")).is_err());
    Ok(())
}

#[test]
fn load_config_file_round_trip() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let file_path = temp_dir.path().join("config.ron");
    let mut config = Config::default();
    config.import.file_extensions = vec!["abc".to_owned(), "txt".to_owned()];
    std::fs::write(&file_path, ron::ser::to_string_pretty(&config, Default::default())?)?;
    assert_eq!(config, load_config_file(&file_path)?);
    Ok(())
}
