use clap::Parser;
use std::process::ExitCode;
use word_count_cli::args::Args;
use word_count_cli::config::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match word_count_cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
