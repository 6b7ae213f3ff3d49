use std::process::ExitCode;

use clap::Parser;
use sweetshop_cli::{Cli, CliConfig, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = CliConfig::from_env().with_overrides(&cli);
    sweetshop_observability::init(config.log_format);
    config.log_warnings();

    let command = cli.command.unwrap_or(Command::Demo);
    let mut stdout = std::io::stdout().lock();

    match sweetshop_cli::run(command, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{}", sweetshop_cli::error_report(&err));
            ExitCode::FAILURE
        }
    }
}
