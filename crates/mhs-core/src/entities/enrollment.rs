use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's enrollment in an activity.
///
/// `(activity_name, email)` is the composite primary key — a student cannot
/// be enrolled twice in the same activity. `activity_name` references an
/// existing [`Activity`](crate::entities::Activity).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrollment {
    pub activity_name: String,
    pub email: String,
    pub signed_up_at: DateTime<Utc>,
}
