//! wikiden - notes connected by [[wiki links]], with a SQLite link graph

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_edit, handle_import, handle_links, handle_list, handle_new, handle_reindex,
        handle_resolve, handle_rm, handle_show,
    },
};
use index::SqliteIndex;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "wikiden", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    let owner = config.owner(cli.owner.as_deref())?;
    tracing::debug!(db = %db_path.display(), owner = %owner, "opening store");

    let mut store = SqliteIndex::open_with(&db_path, config.sync_options())
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    match &cli.command {
        Command::New(args) => handle_new(args, &mut store, &owner),
        Command::Edit(args) => handle_edit(args, &mut store, &owner),
        Command::Rm(args) => handle_rm(args, &mut store, &owner),
        Command::Show(args) => handle_show(args, &store, &owner),
        Command::List(args) => handle_list(args, &store, &owner),
        Command::Resolve(args) => handle_resolve(args, &store, &owner),
        Command::Links(args) => handle_links(args, &store, &owner),
        Command::Reindex(args) => handle_reindex(args, &mut store, &owner),
        Command::Import(args) => handle_import(args, &mut store, &owner),
        Command::Completions(_) => Ok(()),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wikiden={level}")));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
