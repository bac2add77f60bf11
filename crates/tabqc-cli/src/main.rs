//! tabqc CLI - data-quality checks for tabular datasets.

mod cli;
mod client;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            max_tasks,
        } => commands::serve::run(host, port, max_tasks, cli.verbose),

        Commands::Check {
            dataset,
            datadic,
            suite,
            json,
        } => commands::check::run(dataset, datadic, suite, json, cli.verbose),

        Commands::Submit {
            dataset,
            datadic,
            api_base,
            sync,
            interval,
            max_attempts,
        } => commands::submit::run(
            dataset,
            datadic,
            api_base,
            sync,
            interval,
            max_attempts,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
