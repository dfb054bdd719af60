use crate::commands::available_verbs;
use anyhow::Error;
use phonebook_config::ConfigError;
use phonebook_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Problems with a command line itself. Raised before the address book is
/// touched.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid command: {0}. available commands: {list}", list = available_verbs())]
    UnknownVerb(String),
    #[error("usage: {usage}")]
    InvalidArity { usage: &'static str },
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Json
        | StoreErrorKind::Core
        | StoreErrorKind::UnsupportedFormat
        | StoreErrorKind::InvalidDataPath
        | StoreErrorKind::DuplicateContact
        | StoreErrorKind::ContactNotFound
        | StoreErrorKind::NoMatch => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidPrompt(_)
        | ConfigError::InvalidBookPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
