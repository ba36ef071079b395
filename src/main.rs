//! awesome-gen CLI entry point.

use clap::Parser;

use awesome_gen::cli::{Cli, Commands};
use awesome_gen::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    };
    if let Err(err) = LoggerImpl::init(&log_config) {
        awesome_gen::cli::handle_error(err, cli.json);
    }

    let result = match cli.command {
        Commands::Check(args) => awesome_gen::cli::commands::config::check(args, cli.json),
        Commands::Show(args) => awesome_gen::cli::commands::config::show(args, cli.json),
    };

    if let Err(err) = result {
        awesome_gen::cli::handle_error(err, cli.json);
    }
}
