//! # mhs-db
//!
//! libSQL storage for the Mergington activity-signup service.
//!
//! Handles the relational state: the activity catalog and participant
//! enrollments. All state lives here; the catalog and enrollment services
//! ([`service::ActivityService`]) hold no state of their own.
//!
//! Uses the `libsql` crate (C `SQLite` fork) — provides a stable async API
//! and per-connection `PRAGMA foreign_keys`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Handle to the signup database.
///
/// Wraps a libSQL database and connection. Repository methods live on
/// [`service::ActivityService`], which owns one of these.
pub struct SignupDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SignupDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enrollment referential integrity depends on this; it is
        // per-connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let signup_db = Self { db, conn };
        signup_db.run_migrations().await?;
        Ok(signup_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
