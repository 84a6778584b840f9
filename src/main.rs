use std::env;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use gogs_cli::cli::Cli;

/// `TRACEBACK=1` (or `true`, any case) behaves like `--verbose`; kept for
/// script compatibility.
fn traceback_enabled() -> bool {
    env::var("TRACEBACK")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose || traceback_enabled();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if verbose {
                eprintln!("{}", format!("✗ {err:?}").red());
            } else {
                eprintln!("{}", format!("✗ {err:#}").red());
            }
            ExitCode::FAILURE
        }
    }
}
