// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Context as _;
use log::LevelFilter;

use tunebook::{repo::tune::EntityRepo as _, usecases::sqlite::Database};

use crate::{
    cli::{Invocation, Subcommand},
    config::Config,
};

mod cli;
mod config;
mod env;
mod output;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

fn load_config(invocation: &Invocation) -> anyhow::Result<Config> {
    let mut config = if let Some(config_file) = &invocation.config_file {
        config::load_config_file(config_file)?
    } else {
        Config::default()
    };
    // Precedence: command line > environment > configuration file
    if let Some(database_url) = invocation
        .database_url
        .clone()
        .or_else(env::parse_database_url)
    {
        config.patch_database_url(&database_url);
    }
    log::debug!("Configuration: {config:?}");
    Ok(config)
}

fn open_database(config: &Config) -> anyhow::Result<Database> {
    let storage = config.database.connection.storage.clone();
    let mut database = Database::open(storage.clone())
        .with_context(|| format!("opening database {storage}"))?;
    if config.database.migrate_schema_on_startup {
        database
            .migrate_schema()
            .with_context(|| format!("migrating database schema {storage}"))?;
    }
    Ok(database)
}

fn run(invocation: Invocation, config: &Config) -> anyhow::Result<()> {
    let mut database = open_database(config)?;
    match invocation.subcommand {
        Subcommand::Import { root_path } => {
            let outcome = database
                .import_tune_books(&root_path, &(&config.import).into())
                .with_context(|| format!("importing tune books from {}", root_path.display()))?;
            println!("Imported {} tunes", outcome.total_tunes());
        }
        Subcommand::List { book_id, json } => {
            let mut records = Vec::new();
            database.repo().load_tunes_by_book(book_id, &mut records)?;
            output::print_tunes(&records, json)?;
        }
        Subcommand::Search { filter, json } => {
            let mut records = Vec::new();
            database.repo().search_tunes(&filter, &mut records)?;
            output::print_tunes(&records, json)?;
        }
        Subcommand::Count => {
            println!("{}", database.repo().count_tunes()?);
        }
        Subcommand::Maintain { vacuum } => {
            database.cleanse(vacuum)?;
        }
    }
    database.close();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let dotenv_path = env::init_environment();

    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    if let Some(dotenv_path) = dotenv_path {
        log::info!(
            "Loaded environment from file: {path}",
            path = dotenv_path.display()
        );
    }

    let matches = cli::new_command().get_matches();
    let invocation = cli::parse_invocation(&matches)?;
    let config = load_config(&invocation)?;
    run(invocation, &config)
}
