mod commands;
mod error;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use crate::repl::Session;
use phonebook_config as config;
use phonebook_store::{paths, BookSource, ListOrder, Store};

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "Interactive address book")]
struct Cli {
    /// Address book file (defaults to the data directory)
    #[arg(long)]
    book_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book_path,
        config: config_path,
        ..
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    match config::resolve_config_path(config_path) {
        Ok(path) => {
            if path.exists() {
                debug!(path = %path.display(), "config resolved");
            } else {
                debug!(path = %path.display(), "config missing, using defaults");
            }
        }
        Err(err) => {
            debug!(error = %err, "config unavailable");
        }
    }

    let book_path = paths::resolve_book_path(book_path.or_else(|| app_config.book_path.clone()))
        .with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let mut store = Store::open(&book_path)
        .with_context(|| format!("open address book {}", book_path.display()))?;
    match store.source() {
        BookSource::Missing => debug!("no address book yet, starting empty"),
        BookSource::Canonical => debug!(contacts = store.book().len(), "address book loaded"),
        BookSource::Legacy => warn!(
            contacts = store.book().len(),
            "legacy address book format, it will be rewritten on exit"
        ),
    }

    let session_result = {
        let ctx = Context {
            book: store.book_mut(),
            order: ListOrder::from_sorted(app_config.listing.sorted),
        };
        let mut session = Session::new(ctx, &app_config.prompt);
        let stdin = io::stdin();
        let stdout = io::stdout();
        let result = session.run(stdin.lock(), stdout.lock());
        debug!(state = ?session.state(), "session ended");
        result
    };

    let save_result = store
        .save()
        .with_context(|| format!("save address book {}", book_path.display()));
    if save_result.is_ok() {
        debug!(contacts = store.book().len(), "address book saved");
    }

    finish(session_result.map_err(anyhow::Error::from), save_result)
}

/// Combines the session outcome with the save outcome. When both fail the
/// save error is returned with the session error attached as context.
fn finish(session: Result<()>, save: Result<()>) -> Result<()> {
    match (session, save) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(err), Ok(())) => Err(err.context("interactive session")),
        (Ok(()), Err(err)) => Err(err),
        (Err(session_err), Err(save_err)) => {
            warn!(error = %format!("{session_err:#}"), "interactive session failed");
            Err(save_err.context(format!("interactive session failed: {session_err:#}")))
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
