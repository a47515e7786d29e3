// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::bail;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, value_parser};

use tunebook::{
    BookId,
    repo::tune::{StringField, StringFilter},
};

const DATABASE_ARG: &str = "database";

const CONFIG_ARG: &str = "config";

const ROOT_DIR_ARG: &str = "root-dir";

const BOOK_ARG: &str = "book";

const TITLE_ARG: &str = "title";

const RHYTHM_ARG: &str = "rhythm";

const KEY_ARG: &str = "key";

const JSON_ARG: &str = "json";

const VACUUM_ARG: &str = "vacuum";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Subcommand {
    Import { root_path: PathBuf },
    List { book_id: BookId, json: bool },
    Search { filter: StringFilter, json: bool },
    Count,
    Maintain { vacuum: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) database_url: Option<String>,
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) subcommand: Subcommand,
}

fn json_arg() -> Arg {
    Arg::new(JSON_ARG)
        .long(JSON_ARG)
        .help("Print records as JSON")
        .action(ArgAction::SetTrue)
}

pub(crate) fn new_command() -> Command {
    Command::new("tunebook")
        .about("Imports ABC tune books into an SQLite database")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(DATABASE_ARG)
                .long(DATABASE_ARG)
                .help(
                    "The database file or `:memory:`, overrides the DATABASE_URL environment \
                     variable",
                )
                .num_args(1)
                .required(false)
                .global(true),
        )
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .help("A configuration file in RON format")
                .num_args(1)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("import")
                .about("Imports all tune books found below the root directory")
                .arg(
                    Arg::new(ROOT_DIR_ARG)
                        .help("The root directory with one sub-directory per book")
                        .num_args(1)
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Lists all tunes of a book")
                .arg(
                    Arg::new(BOOK_ARG)
                        .long(BOOK_ARG)
                        .help("The book id")
                        .num_args(1)
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Searches tunes by a case-insensitive substring")
                .arg(
                    Arg::new(TITLE_ARG)
                        .long(TITLE_ARG)
                        .help("Search in titles")
                        .num_args(1),
                )
                .arg(
                    Arg::new(RHYTHM_ARG)
                        .long(RHYTHM_ARG)
                        .help("Search in rhythms")
                        .num_args(1),
                )
                .arg(
                    Arg::new(KEY_ARG)
                        .long(KEY_ARG)
                        .help("Search in key signatures")
                        .num_args(1),
                )
                .group(
                    ArgGroup::new("field")
                        .args([TITLE_ARG, RHYTHM_ARG, KEY_ARG])
                        .required(true)
                        .multiple(false),
                )
                .arg(json_arg()),
        )
        .subcommand(Command::new("count").about("Counts all stored tunes"))
        .subcommand(
            Command::new("maintain")
                .about("Analyzes and optimizes the database")
                .arg(
                    Arg::new(VACUUM_ARG)
                        .long(VACUUM_ARG)
                        .help("Rebuild the database file before analyzing")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn search_filter(matches: &ArgMatches) -> Option<StringFilter> {
    [
        (TITLE_ARG, StringField::Title),
        (RHYTHM_ARG, StringField::Rhythm),
        (KEY_ARG, StringField::KeySignature),
    ]
    .into_iter()
    .find_map(|(arg, field)| {
        matches
            .get_one::<String>(arg)
            .map(|contains| StringFilter {
                field,
                contains: contains.clone(),
            })
    })
}

pub(crate) fn parse_invocation(matches: &ArgMatches) -> anyhow::Result<Invocation> {
    let database_url = matches.get_one::<String>(DATABASE_ARG).cloned();
    let config_file = matches.get_one::<PathBuf>(CONFIG_ARG).cloned();
    let subcommand = match matches.subcommand() {
        Some(("import", matches)) => {
            let Some(root_path) = matches.get_one::<PathBuf>(ROOT_DIR_ARG) else {
                bail!("missing root directory");
            };
            Subcommand::Import {
                root_path: root_path.clone(),
            }
        }
        Some(("list", matches)) => {
            let Some(book_id) = matches.get_one::<i64>(BOOK_ARG) else {
                bail!("missing book id");
            };
            Subcommand::List {
                book_id: BookId::new(*book_id),
                json: matches.get_flag(JSON_ARG),
            }
        }
        Some(("search", matches)) => {
            let Some(filter) = search_filter(matches) else {
                bail!("missing search field");
            };
            Subcommand::Search {
                filter,
                json: matches.get_flag(JSON_ARG),
            }
        }
        Some(("count", _)) => Subcommand::Count,
        Some(("maintain", matches)) => Subcommand::Maintain {
            vacuum: matches.get_flag(VACUUM_ARG),
        },
        Some((subcommand, _)) => {
            bail!("unknown subcommand {subcommand}");
        }
        None => {
            bail!("missing subcommand");
        }
    };
    Ok(Invocation {
        database_url,
        config_file,
        subcommand,
    })
}
