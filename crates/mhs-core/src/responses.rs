//! HTTP response body types returned by the activities API.
//!
//! These structs define the JSON shapes for `GET /activities` and the
//! signup/unregister endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One activity in the catalog, with its current participant list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDetail {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Response from `GET /activities`: the full catalog keyed by activity name.
///
/// A `BTreeMap` so the JSON object has a stable key order.
pub type Catalog = BTreeMap<String, ActivityDetail>;

/// Success body for signup and unregister.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body for every failing request, mirroring the `detail` field the
/// API has always returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
