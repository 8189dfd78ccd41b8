// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Siteline website backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Siteline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SitelineConfig {
    /// Site identity and logging settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Outbound SMTP settings.
    #[serde(default)]
    pub mail: MailConfig,

    /// Contact submission pipeline settings.
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Site identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Display name of the site, used in email subjects and bodies.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_site_name() -> String {
    "Siteline".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "siteline.db".to_string()
}

/// Outbound SMTP configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port (STARTTLS).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username. Credentials are only attached when both username and
    /// password are set.
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password.
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sender display name on outbound mail.
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Sender address on outbound mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Address that receives internal contact notifications.
    #[serde(default = "default_notify_address")]
    pub notify_address: String,

    /// Per-send timeout in seconds for SMTP dispatch.
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_name: default_from_name(),
            from_address: default_from_address(),
            notify_address: default_notify_address(),
            send_timeout_secs: default_send_timeout_secs(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "Siteline Contact Form".to_string()
}

fn default_from_address() -> String {
    "noreply@localhost".to_string()
}

fn default_notify_address() -> String {
    "contact@localhost".to_string()
}

fn default_send_timeout_secs() -> u64 {
    10
}

/// Contact submission pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Duplicate-submission window in seconds. A second submission from the
    /// same email inside this window is rejected.
    #[serde(default = "default_duplicate_window_secs")]
    pub duplicate_window_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            duplicate_window_secs: default_duplicate_window_secs(),
        }
    }
}

fn default_duplicate_window_secs() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = SitelineConfig::default();
        assert_eq!(config.site.name, "Siteline");
        assert_eq!(config.site.log_level, "info");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.database_path, "siteline.db");
        assert_eq!(config.mail.smtp_port, 587);
        assert_eq!(config.mail.send_timeout_secs, 10);
        assert_eq!(config.contact.duplicate_window_secs, 300);
    }

    #[test]
    fn sections_deny_unknown_fields() {
        let toml_str = r#"
[contact]
duplicate_window_seconds = 60
"#;
        let result = toml::from_str::<SitelineConfig>(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[server]
port = 3000
"#;
        let config: SitelineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.contact.duplicate_window_secs, 300);
    }
}
