use clap::Parser;
use std::io;
use std::process::ExitCode;
use unique_ints_cli::args::{Args, Mode};
use unique_ints_cli::config::Config;
use unique_ints_cli::error::Result;
use unique_ints_cli::{commands, interactive, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.output.verbose);
    let config = Config::from(&args);
    log::debug!("{config:?}");

    match run(&args, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<bool> {
    let format = args.output.format;
    let mut out = io::stdout().lock();

    commands::prepare_folders(&mut out, config, format)?;

    match args.mode() {
        Mode::All => commands::run_batch(&mut out, config, format),
        Mode::File(path) => commands::run_file(&mut out, config, &path, format),
        Mode::Interactive => {
            interactive::run(&mut io::stdin().lock(), &mut out, config)?;
            Ok(true)
        }
    }
}
