//! Shared test utilities for mhs-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::service::ActivityService;

    /// Create an in-memory service with an empty catalog.
    pub async fn test_service() -> ActivityService {
        ActivityService::open_local(":memory:").await.unwrap()
    }

    /// Create an in-memory service with the canonical activity set seeded.
    pub async fn seeded_service() -> ActivityService {
        let svc = test_service().await;
        svc.seed_activities().await.unwrap();
        svc
    }
}
