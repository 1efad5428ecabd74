//! Entity structs for the activity-signup domain.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize` and `Deserialize` for JSON roundtrip.

mod activity;
mod enrollment;

pub use activity::Activity;
pub use enrollment::Enrollment;
