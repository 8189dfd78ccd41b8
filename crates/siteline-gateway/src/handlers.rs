// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the Siteline API.
//!
//! Handles POST /api/contact, GET /api/products, GET /health.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use siteline_core::SitelineError;
use siteline_storage::queries;

use crate::contact;
use crate::server::AppState;

/// Request body for POST /api/contact.
///
/// Every field is optional at the serde level: a missing field is reported by
/// the matching validation rule, not as a malformed request.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for POST /api/contact.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Whether the submission was accepted.
    pub success: bool,
    /// Short, actionable user-visible message.
    pub message: String,
    /// Present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ContactData>,
}

/// Persisted-submission payload returned on success.
#[derive(Debug, Serialize)]
pub struct ContactData {
    /// Generated row id.
    pub id: i64,
    /// RFC 3339 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ContactResponse {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// POST /api/contact
///
/// Runs the contact pipeline: shape check, sanitize, validate, duplicate
/// window, persist, notify, respond. Validation and rate-limit rejections
/// have no side effects; email failures after a successful insert are logged
/// and never surfaced.
pub async fn post_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let Ok(Json(body)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::failure("Invalid request data")),
        );
    };

    let form = contact::sanitize_request(body);

    if let Some(rule) = contact::validate(&form) {
        return (StatusCode::BAD_REQUEST, Json(ContactResponse::failure(rule)));
    }

    match queries::contact::has_recent_submission(
        &state.db,
        &form.email,
        state.duplicate_window_secs,
    )
    .await
    {
        Ok(false) => {}
        Ok(true) => {
            tracing::info!(
                email = form.email.as_str(),
                "contact submission rejected by duplicate window"
            );
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ContactResponse::failure(
                    "Please wait a few minutes before sending another message",
                )),
            );
        }
        Err(err) => return contact_failure(err),
    }

    let saved = match queries::contact::insert_contact_message(&state.db, &form.into_new_message())
        .await
    {
        Ok(saved) => saved,
        Err(err) => return contact_failure(err),
    };

    tracing::info!(
        id = saved.id,
        name = saved.name.as_str(),
        email = saved.email.as_str(),
        "new contact message"
    );

    // The durable record exists; each email is awaited on its own and a
    // failure is logged, not surfaced.
    if let Err(err) = state.mailer.send_contact_notification(&saved).await {
        tracing::error!(error = %err, id = saved.id, "contact notification email failed");
    }
    if let Err(err) = state.mailer.send_contact_reply(&saved).await {
        tracing::error!(error = %err, id = saved.id, "contact auto-reply email failed");
    }

    (
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Thank you for your message! We'll get back to you soon.".to_string(),
            data: Some(ContactData {
                id: saved.id,
                created_at: saved.created_at,
            }),
        }),
    )
}

/// Map a storage failure to the user-visible contact response.
///
/// Details are logged server-side; the caller only sees a short message, with
/// a missing table distinguished as a configuration problem.
fn contact_failure(err: SitelineError) -> (StatusCode, Json<ContactResponse>) {
    tracing::error!(error = %err, "contact submission failed");
    match err {
        SitelineError::MissingTable => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::failure(
                "Database configuration error. Please contact support.",
            )),
        ),
        SitelineError::Duplicate => (
            StatusCode::CONFLICT,
            Json(ContactResponse::failure(
                "This message appears to be a duplicate. Please try again later.",
            )),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::failure(
                "We're experiencing technical difficulties. Please try again later or contact us directly.",
            )),
        ),
    }
}

/// GET /api/products
///
/// Returns every product row verbatim. An empty table is an empty array, not
/// an error.
pub async fn get_products(State(state): State<AppState>) -> Response {
    match queries::products::list_products(&state.db).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "product listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "Server error" })),
            )
                .into_response()
        }
    }
}

/// GET /health
///
/// Returns health status of the gateway.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
