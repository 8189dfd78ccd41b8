// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain types shared across the Siteline crates.

use serde::{Deserialize, Serialize};

/// A sanitized, validated contact submission ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    /// Submitter name, 2-100 chars.
    pub name: String,
    /// Submitter email address, <=255 chars.
    pub email: String,
    /// Optional phone number, <=20 chars. `None` when absent or blank.
    pub phone: Option<String>,
    /// Message body, 10-2000 chars.
    pub message: String,
}

/// A persisted contact submission row.
///
/// Rows are created once by the contact handler and never updated or deleted
/// here; `is_resolved` exists for external resolution workflows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Generated row id.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Always `false` at creation.
    pub is_resolved: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 update timestamp (equals `created_at` at creation).
    pub updated_at: String,
}

/// A product row, read-only from this system's perspective.
///
/// The table is populated by an out-of-scope administrative system; the
/// listing endpoint returns rows verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_available: bool,
    /// Optional external product link.
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_message_serializes_with_snake_case_fields() {
        let msg = ContactMessage {
            id: 7,
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: None,
            message: "Hello there, testing".to_string(),
            is_resolved: false,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"is_resolved\":false"));
        assert!(json.contains("\"phone\":null"));
    }

    #[test]
    fn product_round_trips_optional_fields() {
        let json = r#"{
            "id": 1,
            "name": "Connect Suite",
            "description": "Team collaboration platform",
            "category": "Software",
            "price": 49.0,
            "image_url": null,
            "is_available": true,
            "link": "https://example.com/connect"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Connect Suite");
        assert_eq!(product.price, Some(49.0));
        assert!(product.image_url.is_none());
        assert!(product.is_available);
        assert_eq!(product.link.as_deref(), Some("https://example.com/connect"));
    }
}
