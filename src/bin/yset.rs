use std::process::ExitCode;

use yql::cli::{main_for, Personality};

fn main() -> ExitCode {
    main_for(Personality::Set)
}
