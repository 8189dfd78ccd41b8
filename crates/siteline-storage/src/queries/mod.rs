// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query functions over the Siteline tables.

pub mod contact;
pub mod products;
