//! Cinder CLI
//!
//! Command-line front end for the cinder logging facility. Initializes the
//! process-wide logging state from flags, runs one subcommand, and tears
//! the state down.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cinder")]
#[command(about = "Cinder - severity-leveled logging front end", long_about = None)]
struct Cli {
    /// Application identity used to tag emitted records
    #[arg(long, default_value = "cinder")]
    app_name: String,

    /// Minimum severity a record needs to be emitted
    #[arg(long, default_value = "info")]
    level: String,

    /// Log-file directory for the provider backend (ignored by the fallback)
    #[arg(long, default_value = "")]
    log_dir: String,

    /// Install the process failure handler before running the command
    #[arg(long)]
    install_failure_handler: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one or more records at a chosen severity
    Emit(commands::emit::EmitArgs),
    /// Run an invariant check that terminates the process on failure
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let threshold = commands::parse_severity_or_die(&cli.level);
    cinder_core::start(cli.app_name.as_str(), threshold, &cli.log_dir);
    if cli.install_failure_handler {
        cinder_core::install_failure_handler();
    }

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    cinder_core::shutdown();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
