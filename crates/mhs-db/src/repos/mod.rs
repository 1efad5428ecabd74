//! Repository methods on [`ActivityService`](crate::service::ActivityService).
//!
//! Split by concern: `catalog` covers reads, seeding, and activity rows;
//! `enrollment` covers the signup/unregister transitions.

pub mod catalog;
pub mod enrollment;
