// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use tempfile::TempDir;

use crate::Result;

use super::*;

fn create_file(root_dir: &TempDir, relative_path: &str) -> anyhow::Result<()> {
    let file_path = root_dir.path().join(relative_path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, "X:1\n")?;
    Ok(())
}

fn visited_files(root_path: &Path, params: &Params) -> Result<(Progress, Vec<PathBuf>)> {
    let mut visited = Vec::new();
    let progress = visit_files::<Error, _>(root_path, params, &mut |file_path| {
        let relative_path = file_path
            .strip_prefix(root_path)
            .map_err(anyhow::Error::from)?;
        visited.push(relative_path.to_path_buf());
        Ok(())
    })?;
    Ok((progress, visited))
}

#[test]
fn visit_abc_files_in_file_name_order() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    create_file(&root_dir, "2/b.abc")?;
    create_file(&root_dir, "2/a.ABC")?;
    create_file(&root_dir, "1/tunes.abc")?;
    create_file(&root_dir, "1/notes.txt")?;
    create_file(&root_dir, "readme.md")?;

    let (progress, visited) = visited_files(root_dir.path(), &Params::default())?;
    assert_eq!(
        vec![
            PathBuf::from("1/tunes.abc"),
            PathBuf::from("2/a.ABC"),
            PathBuf::from("2/b.abc"),
        ],
        visited
    );
    assert_eq!(3, progress.entries.finished);
    assert_eq!(2, progress.entries.skipped);
    // Root directory included
    assert_eq!(3, progress.directories.finished);
    Ok(())
}

#[test]
fn skip_hidden_directories() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    create_file(&root_dir, ".git/7/tunes.abc")?;
    create_file(&root_dir, "7/tunes.abc")?;

    let (_, visited) = visited_files(root_dir.path(), &Params::default())?;
    assert_eq!(vec![PathBuf::from("7/tunes.abc")], visited);
    Ok(())
}

#[test]
fn limit_depth() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    create_file(&root_dir, "1/tunes.abc")?;
    create_file(&root_dir, "1/2/tunes.abc")?;

    let params = Params {
        max_depth: Some(2),
        ..Default::default()
    };
    let (_, visited) = visited_files(root_dir.path(), &params)?;
    assert_eq!(vec![PathBuf::from("1/tunes.abc")], visited);
    Ok(())
}

#[test]
fn custom_file_extensions() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    create_file(&root_dir, "1/tunes.abc")?;
    create_file(&root_dir, "1/tunes.txt")?;

    let params = Params {
        file_extensions: vec!["txt".to_owned()],
        ..Default::default()
    };
    let (_, visited) = visited_files(root_dir.path(), &params)?;
    assert_eq!(vec![PathBuf::from("1/tunes.txt")], visited);
    Ok(())
}

#[test]
fn missing_root_directory() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    let root_path = root_dir.path().join("missing");
    let err = visited_files(&root_path, &Params::default()).unwrap_err();
    assert!(matches!(err, Error::Io(err) if err.kind() == ErrorKind::NotFound));
    Ok(())
}

#[test]
fn root_path_is_a_file() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    create_file(&root_dir, "tunes.abc")?;
    let root_path = root_dir.path().join("tunes.abc");
    let err = visited_files(&root_path, &Params::default()).unwrap_err();
    assert!(matches!(err, Error::Io(err) if err.kind() == ErrorKind::NotADirectory));
    Ok(())
}

#[test]
fn abort_on_visitor_error() -> anyhow::Result<()> {
    let root_dir = tempfile::tempdir()?;
    create_file(&root_dir, "1/a.abc")?;
    create_file(&root_dir, "1/b.abc")?;

    let mut visited = 0;
    let result = visit_files::<Error, _>(root_dir.path(), &Params::default(), &mut |_| {
        visited += 1;
        Err(anyhow::anyhow!("aborted").into())
    });
    assert!(matches!(result, Err(Error::Other(_))));
    assert_eq!(1, visited);
    Ok(())
}
