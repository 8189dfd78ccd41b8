// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact message persistence and the duplicate-window check.

use chrono::{SecondsFormat, Utc};
use rusqlite::params;
use siteline_core::SitelineError;

use crate::database::Database;
use crate::models::{ContactMessage, NewContactMessage};

/// Insert a new contact message with `is_resolved = false` and current
/// timestamps. Returns the persisted row including the generated id.
pub async fn insert_contact_message(
    db: &Database,
    new: &NewContactMessage,
) -> Result<ContactMessage, SitelineError> {
    let new = new.clone();
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO contact_messages (name, email, phone, message, is_resolved, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)",
                params![new.name, new.email, new.phone, new.message, now],
            )?;
            // Race-free under the single-writer model: no other statement can
            // run on this connection between the insert and this call.
            let id = conn.last_insert_rowid();
            Ok(ContactMessage {
                id,
                name: new.name,
                email: new.email,
                phone: new.phone,
                message: new.message,
                is_resolved: false,
                created_at: now.clone(),
                updated_at: now,
            })
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Whether any submission from `email` exists within the last `window_secs`
/// seconds.
///
/// This is the read half of a best-effort read-then-write pair: two requests
/// from the same sender arriving at the same instant can both pass this check
/// and both insert. RFC 3339 strings with a fixed precision compare
/// lexicographically, so the cutoff comparison happens in SQL.
pub async fn has_recent_submission(
    db: &Database,
    email: &str,
    window_secs: u64,
) -> Result<bool, SitelineError> {
    let email = email.to_string();
    let cutoff = (Utc::now() - chrono::Duration::seconds(window_secs as i64))
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id FROM contact_messages WHERE email = ?1 AND created_at > ?2 LIMIT 1",
            )?;
            let found = stmt.exists(params![email, cutoff])?;
            Ok(found)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn open_temp_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_new(email: &str) -> NewContactMessage {
        NewContactMessage {
            name: "Jo".to_string(),
            email: email.to_string(),
            phone: None,
            message: "Hello there, testing".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_returns_generated_id_and_timestamps() {
        let (db, _dir) = open_temp_db().await;

        let saved = insert_contact_message(&db, &make_new("jo@x.com"))
            .await
            .unwrap();
        assert!(saved.id > 0);
        assert!(!saved.is_resolved);
        assert_eq!(saved.created_at, saved.updated_at);
        assert!(saved.created_at.ends_with('Z'));

        let second = insert_contact_message(&db, &make_new("other@x.com"))
            .await
            .unwrap();
        assert!(second.id > saved.id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn recent_submission_found_within_window() {
        let (db, _dir) = open_temp_db().await;

        insert_contact_message(&db, &make_new("jo@x.com"))
            .await
            .unwrap();

        assert!(has_recent_submission(&db, "jo@x.com", 300).await.unwrap());
        // Exact-email match only.
        assert!(!has_recent_submission(&db, "other@x.com", 300).await.unwrap());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn old_submission_is_outside_window() {
        let (db, _dir) = open_temp_db().await;

        // Insert a row stamped well in the past, bypassing the query layer.
        db.connection()
            .call(|conn| {
                conn.execute(
                    "INSERT INTO contact_messages (name, email, message, is_resolved, created_at, updated_at)
                     VALUES ('Jo', 'jo@x.com', 'an older message body', 0, ?1, ?1)",
                    params!["2020-01-01T00:00:00.000Z"],
                )?;
                Ok(())
            })
            .await
            .unwrap();

        assert!(!has_recent_submission(&db, "jo@x.com", 300).await.unwrap());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn phone_is_persisted_when_present() {
        let (db, _dir) = open_temp_db().await;

        let mut new = make_new("jo@x.com");
        new.phone = Some("+1 555-0100".to_string());
        let saved = insert_contact_message(&db, &new).await.unwrap();
        assert_eq!(saved.phone.as_deref(), Some("+1 555-0100"));

        let stored: Option<String> = db
            .connection()
            .call(move |conn| {
                let phone = conn.query_row(
                    "SELECT phone FROM contact_messages WHERE id = ?1",
                    params![saved.id],
                    |row| row.get(0),
                )?;
                Ok(phone)
            })
            .await
            .unwrap();
        assert_eq!(stored.as_deref(), Some("+1 555-0100"));

        db.close().await.unwrap();
    }
}
