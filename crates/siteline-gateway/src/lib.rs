// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Siteline website backend.
//!
//! Serves the two public API routes (product listing and contact submission)
//! plus an unauthenticated health endpoint. The contact pipeline lives in
//! [`contact`]; route assembly and shared state live in [`server`].

pub mod contact;
pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, AppState, ServerConfig};
