use std::process::ExitCode;

use yql::cli::{main_for, Personality};

fn main() -> ExitCode {
    // Symlinks named yget/yset reuse this binary.
    let personality = std::env::args_os()
        .next()
        .map(|program| Personality::from_program_name(&program))
        .unwrap_or(Personality::Yql);
    main_for(personality)
}
