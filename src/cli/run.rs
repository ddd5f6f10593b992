//! Turns parsed arguments into a resolved invocation and carries it out.

use crate::config::{Config, FILE_ENV_VAR};
use crate::document::parser::to_yaml_string;
use crate::file::loader::{load_document, read_value_from};
use crate::file::saver::save_document;
use crate::keypath::{self, evaluator::ROOT_LABEL, KeyPath};
use crate::logging::init_logging;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};

use super::CommonArgs;

/// Where `set` takes its value from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    Arg(String),
    Stdin,
}

/// The operation requested on the command line, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Get {
        keypath: String,
    },
    Set {
        keypath: String,
        value: ValueSource,
        dry_run: bool,
    },
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub quiet: bool,
    pub file: Option<PathBuf>,
    pub verbose: u8,
    pub action: Action,
}

impl Request {
    pub fn new(common: CommonArgs, action: Action) -> Self {
        Self {
            quiet: common.quiet,
            file: common.file,
            verbose: common.verbose,
            action,
        }
    }
}

/// A validated operation with its keypath already compiled.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Get(KeyPath),
    Set {
        path: KeyPath,
        value: String,
        dry_run: bool,
    },
}

/// Everything one run needs, resolved from flags, environment and config.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub data_file: PathBuf,
    pub config: Config,
    pub operation: Operation,
}

impl Invocation {
    /// Resolves a request.
    ///
    /// The keypath is compiled first, so a bad keypath is reported before
    /// the data file is looked up or opened.
    pub fn resolve<R: Read>(
        request: Request,
        config: Config,
        env_file: Option<OsString>,
        stdin: R,
    ) -> Result<Self> {
        let operation = match request.action {
            Action::Get { keypath } => Operation::Get(KeyPath::compile(&keypath)?),
            Action::Set {
                keypath,
                value,
                dry_run,
            } => {
                let path = KeyPath::compile(&keypath)?;
                let value = match value {
                    ValueSource::Arg(value) => value,
                    ValueSource::Stdin => read_value_from(stdin)?,
                };
                Operation::Set {
                    path,
                    value,
                    dry_run,
                }
            }
        };

        let data_file = config.resolve_data_file(request.file, env_file)?;

        Ok(Self {
            data_file,
            config,
            operation,
        })
    }
}

/// Carries out an invocation, writing any output to `out`.
///
/// A failing `set` never touches the data file.
pub fn execute<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    let mut doc = load_document(&invocation.data_file)?;
    debug!(file = %invocation.data_file.display(), kind = doc.kind(), "loaded data file");

    match &invocation.operation {
        Operation::Get(path) => {
            let value = keypath::get(&doc, path)?;
            writeln!(out, "{}", value).context("Failed to write output")?;
        }
        Operation::Set {
            path,
            value,
            dry_run,
        } => {
            let label = path.last_key().unwrap_or(ROOT_LABEL);
            let previous = keypath::set(&mut doc, path, value)?;
            let stored = keypath::get(&doc, path)?;
            info!("{} is currently {}", label, previous);
            info!("{} is now {}", label, stored);

            if *dry_run {
                write!(out, "{}", to_yaml_string(&doc)?).context("Failed to write output")?;
            } else {
                save_document(&invocation.data_file, &doc, &invocation.config)?;
            }
        }
    }

    Ok(())
}

/// Falls back to the default config when the config file is broken.
///
/// The returned warning is logged by the caller once logging is set up.
fn config_or_default(loaded: Result<Config>) -> (Config, Option<String>) {
    match loaded {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("{:#}; using default settings", err)),
        ),
    }
}

/// Runs a parsed request against the real environment and stdio.
pub fn run(program: &str, request: Request) -> ExitCode {
    let (config, config_warning) = config_or_default(Config::load());
    let quiet = request.quiet || config.quiet;
    init_logging(quiet, request.verbose, &config.log_level);
    if let Some(message) = config_warning {
        warn!("{}", message);
    }

    let result = Invocation::resolve(
        request,
        config,
        std::env::var_os(FILE_ENV_VAR),
        io::stdin().lock(),
    )
    .and_then(|invocation| execute(&invocation, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !quiet {
                eprintln!("{}: {:#}", program, err);
            }
            ExitCode::FAILURE
        }
    }
}
