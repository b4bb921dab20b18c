// buildver - build version parsing and reporting
// Main CLI entry point

use buildver::cli::{Cli, CliDispatcher};
use buildver::utils::error::UserError;
use clap::Parser;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli.command);

    if let Err(err) = result {
        log::debug!("command failed: {err:?}");
        let user_error = UserError::from_buildver_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
