//! Serve command - run the HTTP validation API.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::server::{app, state::AppState};

pub fn run(
    host: String,
    port: u16,
    max_tasks: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(verbose);

    let addr: std::net::SocketAddr = format!("{host}:{port}").parse()?;
    let state = AppState::new(max_tasks);

    println!(
        "{} http://{}",
        "Serving validation API at".cyan().bold(),
        addr
    );
    println!("  Task capacity: {max_tasks}");
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, addr))?;

    Ok(())
}

/// Log filter comes from LOG_LEVEL, then RUST_LOG, then a flag-derived default.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = std::env::var("LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
