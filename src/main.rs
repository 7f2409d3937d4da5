//! Counter App - Main Entry Point
//!
//! A counter widget mounted in a page shell.

use counter_app::app::application::run_app;
use counter_app::helpers::is_development;

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting Counter App...");

    // Run the GPUI application
    run_app();
}
