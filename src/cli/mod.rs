//! Command-line surface for yql.
//!
//! The same operations are reachable three ways:
//!
//! - `yql [-q] [-f FPATH] get <keypath>` / `yql ... set [--stdin] <keypath> [value]`
//! - `yget [-q] [-f FPATH] <keypath>`
//! - `yset [-q] [-f FPATH] [--stdin] <keypath> [value]`
//!
//! The `yql` binary also looks at the name it was invoked under, so a
//! symlink called `yget` or `yset` behaves like the dedicated binary.

pub mod run;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use run::{execute, Action, Invocation, Operation, Request, ValueSource};

/// Options accepted by every entry point.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Quiet warnings and error messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the YAML data file (default: $YQL_FILE)
    #[arg(short = 'f', long = "file", value_name = "FPATH", global = true)]
    pub file: Option<PathBuf>,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Arguments of the `get` operation.
#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Keypath to read, e.g. foo.bar[2].baz
    pub keypath: String,
}

/// Arguments of the `set` operation.
#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Read the value from stdin instead of the command line
    #[arg(long)]
    pub stdin: bool,

    /// Print the updated document instead of writing the data file
    #[arg(long)]
    pub dry_run: bool,

    /// Keypath to write, e.g. foo.bar[2].baz
    pub keypath: String,

    /// New value; stored as an integer when it parses as one
    #[arg(
        required_unless_present = "stdin",
        conflicts_with = "stdin",
        allow_hyphen_values = true
    )]
    pub value: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the value at a keypath
    Get(GetArgs),
    /// Store a value at a keypath, creating missing maps on the way
    Set(SetArgs),
}

/// `yql` - get and set values in a YAML file
#[derive(Parser, Debug)]
#[command(name = "yql")]
#[command(version)]
#[command(about = "Get and set single values in a YAML file by keypath", long_about = None)]
pub struct YqlCli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// `yget` - shorthand for `yql get`
#[derive(Parser, Debug)]
#[command(name = "yget")]
#[command(version)]
#[command(about = "Print the value at a keypath in a YAML file", long_about = None)]
pub struct YgetCli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub get: GetArgs,
}

/// `yset` - shorthand for `yql set`
#[derive(Parser, Debug)]
#[command(name = "yset")]
#[command(version)]
#[command(about = "Store a value at a keypath in a YAML file", long_about = None)]
pub struct YsetCli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub set: SetArgs,
}

/// Which argument grammar to parse with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    Yql,
    Get,
    Set,
}

impl Personality {
    /// Picks the personality from the program name (argv[0]).
    pub fn from_program_name(program: &OsStr) -> Self {
        let stem = Path::new(program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        match stem {
            "yget" => Personality::Get,
            "yset" => Personality::Set,
            _ => Personality::Yql,
        }
    }

    pub fn program_name(self) -> &'static str {
        match self {
            Personality::Yql => "yql",
            Personality::Get => "yget",
            Personality::Set => "yset",
        }
    }

    /// Parses `args` (including argv[0]) into a [`Request`].
    ///
    /// Exits the process with a usage message on invalid arguments.
    pub fn parse_request<I, T>(self, args: I) -> Request
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match self.try_parse_request(args) {
            Ok(request) => request,
            Err(err) => err.exit(),
        }
    }

    pub fn try_parse_request<I, T>(self, args: I) -> Result<Request, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(match self {
            Personality::Yql => {
                let cli = YqlCli::try_parse_from(args)?;
                let action = match cli.command {
                    Command::Get(get) => Action::from(get),
                    Command::Set(set) => Action::from(set),
                };
                Request::new(cli.common, action)
            }
            Personality::Get => {
                let cli = YgetCli::try_parse_from(args)?;
                Request::new(cli.common, Action::from(cli.get))
            }
            Personality::Set => {
                let cli = YsetCli::try_parse_from(args)?;
                Request::new(cli.common, Action::from(cli.set))
            }
        })
    }
}

impl From<GetArgs> for Action {
    fn from(args: GetArgs) -> Self {
        Action::Get {
            keypath: args.keypath,
        }
    }
}

impl From<SetArgs> for Action {
    fn from(args: SetArgs) -> Self {
        let value = match args.value {
            Some(value) if !args.stdin => ValueSource::Arg(value),
            _ => ValueSource::Stdin,
        };
        Action::Set {
            keypath: args.keypath,
            value,
            dry_run: args.dry_run,
        }
    }
}

/// Entry point shared by the `yql`, `yget` and `yset` binaries.
pub fn main_for(personality: Personality) -> ExitCode {
    let request = personality.parse_request(std::env::args_os());
    run::run(personality.program_name(), request)
}
