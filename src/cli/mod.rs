pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = commands::handle_generate_command(&cli) {
        log::error!("Failed to generate table of contents: {}", e);
        std::process::exit(1);
    }
}
