// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core error and domain types for the Siteline website backend.
//!
//! The canonical domain types (`ContactMessage`, `Product`) live here so the
//! storage, mailer, and gateway crates can share them without depending on
//! each other.

pub mod error;
pub mod types;

pub use error::SitelineError;
