mod cli;

use anyhow::Context;
use application::{print_banner, EmployeeApp};
use clap::Parser;
use cli::Cli;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    print_banner(&mut io::stdout())?;

    // Load configuration from .env, environment variables and flags
    let config = cli.load_config()?;
    init_tracing(&config.log_level)?;

    println!("\nInitializing database...");
    let app = EmployeeApp::new(&config.database_url);
    // A failed schema setup is only logged; connectivity decides whether we go on
    match app.database().initialize() {
        Ok(()) => println!("Database initialized successfully!"),
        Err(e) => tracing::error!("Error initializing database: {}", e),
    }
    app.database().check_connection().with_context(|| {
        format!(
            "failed to connect to database '{}'; check DATABASE_URL or pass --database",
            config.database_url
        )
    })?;
    println!("Connected to database successfully!");
    tracing::info!(database = %config.database_url, "starting console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.console(stdin.lock(), stdout.lock()).run()?;

    Ok(())
}

/// Logs go to stderr so they never interleave with console prompts.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("invalid log level '{}'", default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
