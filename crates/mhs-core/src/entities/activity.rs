use serde::{Deserialize, Serialize};

/// An extracurricular activity offered by the school.
///
/// `name` is the primary key. Activities are created at seed time and are
/// immutable afterwards; only their participant set changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    /// Human-readable meeting schedule, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    pub schedule: String,
    /// Capacity: upper bound on concurrent enrollments. Always positive.
    pub max_participants: i64,
}
