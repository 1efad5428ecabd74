//! Service layer over the signup database.
//!
//! `ActivityService` wraps [`SignupDb`] and carries all repository methods
//! (`impl ActivityService` blocks in `repos/`). It holds no state of its
//! own — every operation reads or writes through the database connection.

use crate::SignupDb;
use crate::error::DatabaseError;

/// Catalog and enrollment operations over a [`SignupDb`].
///
/// Mutating methods (signup, unregister, seeding) run their check-then-act
/// sequence inside a single immediate-mode transaction, so invariants hold
/// even under concurrent requests against the same activity.
pub struct ActivityService {
    db: SignupDb,
}

impl ActivityService {
    /// Open a local database and wrap it in a service.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SignupDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing database handle.
    #[must_use]
    pub const fn from_db(db: SignupDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SignupDb {
        &self.db
    }
}
