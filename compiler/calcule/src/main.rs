//! Calcule CLI

use std::io;
use std::process::ExitCode;

use calcule::cli::{init_tracing, parse_args, run, Command, EXIT_USAGE, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&options, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => ExitCode::from(status),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
