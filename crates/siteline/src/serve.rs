// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `siteline serve` command implementation.
//!
//! Opens the SQLite database (running migrations), builds the SMTP mailer,
//! and starts the gateway HTTP server. Serves until ctrl-c.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use siteline_config::model::SitelineConfig;
use siteline_core::SitelineError;
use siteline_gateway::{start_server, AppState, ServerConfig};
use siteline_mailer::SmtpMailer;
use siteline_storage::Database;

/// Runs the `siteline serve` command.
pub async fn run_serve(config: SitelineConfig) -> Result<(), SitelineError> {
    init_tracing(&config.site.log_level);

    info!("starting siteline serve");

    let db = Database::open(&config.storage.database_path).await?;
    info!(
        path = config.storage.database_path.as_str(),
        "storage ready"
    );

    let mailer = SmtpMailer::new(config.mail.clone(), &config.site.name)?;
    info!(
        relay = config.mail.smtp_host.as_str(),
        notify = config.mail.notify_address.as_str(),
        "mailer ready"
    );

    let state = AppState {
        db,
        mailer: Arc::new(mailer),
        duplicate_window_secs: config.contact.duplicate_window_secs,
        start_time: Instant::now(),
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    info!("siteline serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "siteline={log_level},siteline_gateway={log_level},siteline_storage={log_level},siteline_mailer={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
