// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and well-formed mail addresses.

use crate::diagnostic::ConfigError;
use crate::model::SitelineConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SitelineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.site.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "site.name must not be empty".to_string(),
        });
    }

    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let addr = config.server.host.trim();
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{addr}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.server.port == 0 {
        errors.push(ConfigError::Validation {
            message: "server.port must not be 0".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.mail.smtp_host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "mail.smtp_host must not be empty".to_string(),
        });
    }

    for (key, addr) in [
        ("mail.from_address", &config.mail.from_address),
        ("mail.notify_address", &config.mail.notify_address),
    ] {
        if !addr.contains('@') || addr.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} `{addr}` is not a valid email address"),
            });
        }
    }

    if config.mail.send_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "mail.send_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.contact.duplicate_window_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "contact.duplicate_window_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
