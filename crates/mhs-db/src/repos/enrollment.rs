//! Enrollment repository: the signup and unregister transitions.
//!
//! Both transitions are linear validate-then-mutate sequences. The check
//! order is significant and fixed: activity existence, then membership,
//! then capacity. An absent activity is always reported as not-found, even
//! when a capacity check would also fail.

use chrono::Utc;
use mhs_core::entities::Enrollment;

use crate::error::{DatabaseError, SignupError};
use crate::helpers::parse_datetime;
use crate::repos::catalog::get_activity_on;
use crate::service::ActivityService;

/// Fetch the enrollment row for `(activity_name, email)`, if any.
async fn get_enrollment_on(
    conn: &libsql::Connection,
    activity_name: &str,
    email: &str,
) -> Result<Option<Enrollment>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT activity_name, email, signed_up_at FROM participants
             WHERE activity_name = ?1 AND email = ?2",
            libsql::params![activity_name, email],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(Enrollment {
            activity_name: row.get::<String>(0)?,
            email: row.get::<String>(1)?,
            signed_up_at: parse_datetime(&row.get::<String>(2)?)?,
        })),
        None => Ok(None),
    }
}

async fn count_enrollments_on(
    conn: &libsql::Connection,
    activity_name: &str,
) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT COUNT(*) FROM participants WHERE activity_name = ?1",
            [activity_name],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

impl ActivityService {
    /// Current enrollment count for an activity.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_enrollments(&self, activity_name: &str) -> Result<i64, DatabaseError> {
        count_enrollments_on(self.db().conn(), activity_name).await
    }

    /// Whether `(activity_name, email)` is currently enrolled.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn is_enrolled(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<bool, DatabaseError> {
        Ok(get_enrollment_on(self.db().conn(), activity_name, email)
            .await?
            .is_some())
    }

    /// Sign a student up for an activity.
    ///
    /// Checks run in order inside one immediate transaction:
    /// 1. activity exists — else [`SignupError::ActivityNotFound`]
    /// 2. not already enrolled — else [`SignupError::AlreadyEnrolled`]
    /// 3. below capacity — else [`SignupError::ActivityFull`]
    ///
    /// The immediate transaction takes the write lock up front, so two
    /// concurrent signups for the last slot cannot both pass the capacity
    /// check. Failure paths drop the transaction without mutating anything.
    ///
    /// # Errors
    ///
    /// Returns the validation variants above, or `SignupError::Database`
    /// for storage failures.
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Enrollment, SignupError> {
        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await
            .map_err(DatabaseError::from)?;

        let Some(activity) = get_activity_on(&tx, activity_name).await? else {
            return Err(SignupError::ActivityNotFound);
        };
        if get_enrollment_on(&tx, activity_name, email).await?.is_some() {
            return Err(SignupError::AlreadyEnrolled);
        }
        if count_enrollments_on(&tx, activity_name).await? >= activity.max_participants {
            return Err(SignupError::ActivityFull);
        }

        let now = Utc::now();
        tx.execute(
            "INSERT INTO participants (activity_name, email, signed_up_at)
             VALUES (?1, ?2, ?3)",
            libsql::params![activity_name, email, now.to_rfc3339()],
        )
        .await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(activity = activity_name, email, "signed up");
        Ok(Enrollment {
            activity_name: activity_name.to_string(),
            email: email.to_string(),
            signed_up_at: now,
        })
    }

    /// Remove a student's enrollment in an activity.
    ///
    /// Checks run in order inside one immediate transaction:
    /// 1. activity exists — else [`SignupError::ActivityNotFound`]
    /// 2. currently enrolled — else [`SignupError::NotEnrolled`]
    ///
    /// Returns the removed enrollment.
    ///
    /// # Errors
    ///
    /// Returns the validation variants above, or `SignupError::Database`
    /// for storage failures.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Enrollment, SignupError> {
        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await
            .map_err(DatabaseError::from)?;

        if get_activity_on(&tx, activity_name).await?.is_none() {
            return Err(SignupError::ActivityNotFound);
        }
        let Some(enrollment) = get_enrollment_on(&tx, activity_name, email).await? else {
            return Err(SignupError::NotEnrolled);
        };

        tx.execute(
            "DELETE FROM participants WHERE activity_name = ?1 AND email = ?2",
            libsql::params![activity_name, email],
        )
        .await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(activity = activity_name, email, "unregistered");
        Ok(enrollment)
    }
}
