//! Dusangire Lunch admin console - application entry point.
//!
//! CLI-based entry point that dispatches to the console commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dusangire_admin::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    errors::AppError,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::from_env();
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Login(args) => commands::login::execute(args, config).await,
        Commands::Logout => commands::logout::execute(config).await,
        Commands::Dashboard => commands::dashboard::execute(config).await,
        Commands::Transfers(args) => commands::transfers::execute(args, config).await,
        Commands::Schools(args) => commands::schools::execute(args, config).await,
        Commands::Distributions(args) => commands::distributions::execute(args, config).await,
        Commands::Contributions(args) => commands::contributions::execute(args, config).await,
        Commands::Users(args) => commands::users::execute(args, config).await,
        Commands::Review => commands::review::execute(config).await,
        Commands::Trash => commands::trash::execute(config).await,
        Commands::Reports(args) => commands::reports::execute(args, config).await,
    };

    // Render failures for the user; the library never prints on its own
    if let Err(e) = result {
        eprintln!("Error: {}", e.user_message());
        if matches!(e, AppError::Unauthenticated) {
            eprintln!("Run 'dusangire-admin login' to start a session.");
        }
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
