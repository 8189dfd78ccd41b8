// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./siteline.toml` > `~/.config/siteline/siteline.toml`
//! > `/etc/siteline/siteline.toml` with environment variable overrides via the
//! `SITELINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SitelineConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/siteline/siteline.toml` (system-wide)
/// 3. `~/.config/siteline/siteline.toml` (user XDG config)
/// 4. `./siteline.toml` (local directory)
/// 5. `SITELINE_*` environment variables
pub fn load_config() -> Result<SitelineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SitelineConfig::default()))
        .merge(Toml::file("/etc/siteline/siteline.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("siteline/siteline.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("siteline.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SitelineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SitelineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SitelineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SitelineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SITELINE_MAIL_SMTP_HOST` must map to
/// `mail.smtp_host`, not `mail.smtp.host`.
fn env_provider() -> Env {
    Env::prefixed("SITELINE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SITELINE_STORAGE_DATABASE_PATH -> "storage_database_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("site_", "site.", 1)
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("mail_", "mail.", 1)
            .replacen("contact_", "contact.", 1);
        mapped.into()
    })
}
