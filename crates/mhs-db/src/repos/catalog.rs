//! Catalog repository: activity reads, participant listing, and seeding.

use std::collections::BTreeMap;

use mhs_core::entities::Activity;
use mhs_core::responses::{ActivityDetail, Catalog};

use crate::error::DatabaseError;
use crate::service::ActivityService;

/// The canonical activity set, inserted once when the catalog is empty.
const SEED_ACTIVITIES: [(&str, &str, &str, i64); 9] = [
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
    ),
];

fn row_to_activity(row: &libsql::Row) -> Result<Activity, DatabaseError> {
    Ok(Activity {
        name: row.get::<String>(0)?,
        description: row.get::<String>(1)?,
        schedule: row.get::<String>(2)?,
        max_participants: row.get::<i64>(3)?,
    })
}

/// Look up one activity by name on the given connection.
///
/// Free function so the enrollment transitions can run the same lookup
/// inside their transaction (`libsql::Transaction` derefs to `Connection`).
pub(crate) async fn get_activity_on(
    conn: &libsql::Connection,
    name: &str,
) -> Result<Option<Activity>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT name, description, schedule, max_participants
             FROM activities WHERE name = ?1",
            [name],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_activity(&row)?)),
        None => Ok(None),
    }
}

impl ActivityService {
    /// List all activities, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT name, description, schedule, max_participants
                 FROM activities ORDER BY name",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_activity(&row)?);
        }
        Ok(results)
    }

    /// Look up one activity by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_activity(&self, name: &str) -> Result<Option<Activity>, DatabaseError> {
        get_activity_on(self.db().conn(), name).await
    }

    /// Insert an activity row. Seed-time only: activities are immutable and
    /// the name is the primary key, so re-inserting an existing name fails.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn insert_activity(&self, activity: &Activity) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO activities (name, description, schedule, max_participants)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    activity.name.as_str(),
                    activity.description.as_str(),
                    activity.schedule.as_str(),
                    activity.max_participants
                ],
            )
            .await?;
        Ok(())
    }

    /// List the enrolled emails for one activity, in signup order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_participants(&self, activity_name: &str) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT email FROM participants
                 WHERE activity_name = ?1 ORDER BY signed_up_at, email",
                [activity_name],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row.get::<String>(0)?);
        }
        Ok(results)
    }

    /// Build the full catalog: every activity with its participant list.
    ///
    /// Side-effect-free read composing [`Self::list_activities`] and
    /// [`Self::list_participants`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails.
    pub async fn list_catalog(&self) -> Result<Catalog, DatabaseError> {
        let mut catalog = BTreeMap::new();
        for activity in self.list_activities().await? {
            let participants = self.list_participants(&activity.name).await?;
            catalog.insert(
                activity.name,
                ActivityDetail {
                    description: activity.description,
                    schedule: activity.schedule,
                    max_participants: activity.max_participants,
                    participants,
                },
            );
        }
        Ok(catalog)
    }

    /// Seed the canonical activity set if the catalog is empty.
    ///
    /// Idempotent across startups: a no-op when at least one activity
    /// already exists. The empty-check and inserts run in one immediate
    /// transaction so two racing startups cannot both seed.
    ///
    /// Returns `true` if seeding ran.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any statement fails.
    pub async fn seed_activities(&self) -> Result<bool, DatabaseError> {
        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?;

        let mut rows = tx.query("SELECT COUNT(*) FROM activities", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        if row.get::<i64>(0)? > 0 {
            return Ok(false);
        }

        for (name, description, schedule, max_participants) in SEED_ACTIVITIES {
            tx.execute(
                "INSERT INTO activities (name, description, schedule, max_participants)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![name, description, schedule, max_participants],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::info!(count = SEED_ACTIVITIES.len(), "seeded canonical activity set");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{seeded_service, test_service};

    #[tokio::test]
    async fn seed_creates_canonical_set() {
        let svc = test_service().await;
        assert!(svc.seed_activities().await.unwrap());

        let activities = svc.list_activities().await.unwrap();
        assert_eq!(activities.len(), 9);

        let chess = svc.get_activity("Chess Club").await.unwrap().unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");

        let math = svc.get_activity("Math Club").await.unwrap().unwrap();
        assert_eq!(math.max_participants, 10);
    }

    #[tokio::test]
    async fn seed_twice_is_a_noop() {
        let svc = test_service().await;
        assert!(svc.seed_activities().await.unwrap());
        assert!(!svc.seed_activities().await.unwrap());

        assert_eq!(svc.list_activities().await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn seed_skipped_when_any_activity_exists() {
        let svc = test_service().await;
        svc.insert_activity(&mhs_core::entities::Activity {
            name: "Robotics Club".to_string(),
            description: "Build robots".to_string(),
            schedule: "Saturdays".to_string(),
            max_participants: 8,
        })
        .await
        .unwrap();

        assert!(!svc.seed_activities().await.unwrap());
        assert_eq!(svc.list_activities().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_activity_absent_returns_none() {
        let svc = seeded_service().await;
        assert!(svc.get_activity("Knitting Circle").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn catalog_lists_every_activity_with_participants() {
        let svc = seeded_service().await;
        svc.signup("Chess Club", "a@mergington.edu").await.unwrap();
        svc.signup("Chess Club", "b@mergington.edu").await.unwrap();

        let catalog = svc.list_catalog().await.unwrap();
        assert_eq!(catalog.len(), 9);

        let chess = &catalog["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()]
        );
        assert!(catalog["Art Club"].participants.is_empty());
    }
}
