// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Siteline - server-side backend for a company marketing website.
//!
//! This is the binary entry point for the Siteline server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Siteline - server-side backend for a company marketing website.
#[derive(Parser, Debug)]
#[command(name = "siteline", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Siteline HTTP server.
    Serve,
    /// Load and validate configuration, then exit.
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match siteline_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            siteline_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                tracing::error!(error = %e, "serve failed");
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Check) => {
            println!(
                "configuration OK (site.name={}, server={}:{})",
                config.site.name, config.server.host, config.server.port
            );
        }
        None => {
            println!("siteline: use --help for available commands");
        }
    }
}
