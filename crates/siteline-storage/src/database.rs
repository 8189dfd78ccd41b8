// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background thread.
//! Query modules accept `&Database` and call through `connection().call()`.
//! Do NOT create additional Connection instances for writes.

use siteline_core::SitelineError;
use tokio_rusqlite::Connection;

/// Handle to the SQLite database.
///
/// Wraps a single `tokio_rusqlite::Connection`; cloning is cheap and all
/// clones share the same background connection thread.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs, and run all
    /// pending migrations.
    pub async fn open(path: &str) -> Result<Self, SitelineError> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| map_tr_err(tokio_rusqlite::Error::Error(e)))?;

        conn.call(|conn| {
            conn.pragma_update(None, "journal_mode", "WAL")
                .and_then(|_| conn.pragma_update(None, "synchronous", "NORMAL"))
                .and_then(|_| conn.pragma_update(None, "foreign_keys", "ON"))
                // Bounds lock waits instead of failing immediately with SQLITE_BUSY.
                .and_then(|_| conn.busy_timeout(std::time::Duration::from_secs(5)))
                .map_err(|e| map_tr_err(tokio_rusqlite::Error::Error(e)))?;
            crate::migrations::run_migrations(conn)?;
            Ok(())
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Error(inner) => inner,
            other => SitelineError::Storage {
                source: Box::new(other),
            },
        })?;

        tracing::debug!(path, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the background connection thread.
    pub async fn close(self) -> Result<(), SitelineError> {
        self.conn.close().await.map_err(map_tr_err)
    }
}

/// Map a tokio-rusqlite error into the Siteline error taxonomy.
///
/// Two SQLite failure classes are distinguished for the contact pipeline:
/// a missing table (deployment misconfiguration, reported as such) and a
/// uniqueness violation (reported as a duplicate submission).
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> SitelineError {
    if let tokio_rusqlite::Error::Error(rusqlite::Error::SqliteFailure(code, message)) = &e {
        if code.code == rusqlite::ErrorCode::ConstraintViolation {
            return SitelineError::Duplicate;
        }
        if message
            .as_deref()
            .is_some_and(|m| m.contains("no such table"))
        {
            return SitelineError::MissingTable;
        }
    }
    SitelineError::Storage {
        source: Box::new(e),
    }
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

    #[tokio::test]
    async fn open_runs_migrations() {
        let (db, _dir) = open_temp_db().await;
        let tables: Vec<String> = db
            .connection()
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                let mut tables = Vec::new();
                for row in rows {
                    tables.push(row?);
                }
                Ok(tables)
            })
            .await
            .unwrap();
        assert!(tables.iter().any(|t| t == "contact_messages"));
        assert!(tables.iter().any(|t| t == "products"));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent_across_restarts() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
        // Re-opening the same file must not re-apply migrations.
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn missing_table_is_classified() {
        let (db, _dir) = open_temp_db().await;
        let err = db
            .connection()
            .call(|conn| {
                conn.execute("SELECT * FROM nonexistent", [])?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
            .unwrap_err();
        assert!(matches!(err, SitelineError::MissingTable));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn constraint_violation_is_classified_as_duplicate() {
        let (db, _dir) = open_temp_db().await;
        let err = db
            .connection()
            .call(|conn| {
                conn.execute_batch(
                    "CREATE UNIQUE INDEX idx_one_per_email ON contact_messages (email);
                     INSERT INTO contact_messages (name, email, message, is_resolved, created_at, updated_at)
                     VALUES ('A', 'a@x.com', 'first message here', 0, '2026-01-01T00:00:00.000Z', '2026-01-01T00:00:00.000Z');
                     INSERT INTO contact_messages (name, email, message, is_resolved, created_at, updated_at)
                     VALUES ('B', 'a@x.com', 'second message here', 0, '2026-01-01T00:00:01.000Z', '2026-01-01T00:00:01.000Z');",
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
            .unwrap_err();
        assert!(matches!(err, SitelineError::Duplicate));
        db.close().await.unwrap();
    }
}
