//! Request handlers bridging routes to the enrollment and catalog services.
//!
//! Handlers take parsed inputs and return domain results; the accept loop
//! in `server` turns those into HTTP responses. This keeps them testable
//! against an in-memory database.

use mhs_core::responses::{Catalog, MessageResponse};
use mhs_db::error::{DatabaseError, SignupError};
use mhs_db::service::ActivityService;

/// `GET /activities`
pub async fn catalog(service: &ActivityService) -> Result<Catalog, DatabaseError> {
    service.list_catalog().await
}

/// `POST /activities/{activity}/signup?email=...`
pub async fn signup(
    service: &ActivityService,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    let enrollment = service.signup(activity, email).await?;
    Ok(MessageResponse {
        message: format!(
            "Signed up {} for {}",
            enrollment.email, enrollment.activity_name
        ),
    })
}

/// `DELETE /activities/{activity}/unregister?email=...`
pub async fn unregister(
    service: &ActivityService,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    let enrollment = service.unregister(activity, email).await?;
    Ok(MessageResponse {
        message: format!(
            "Unregistered {} from {}",
            enrollment.email, enrollment.activity_name
        ),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn seeded_service() -> ActivityService {
        let svc = ActivityService::open_local(":memory:").await.unwrap();
        svc.seed_activities().await.unwrap();
        svc
    }

    #[tokio::test]
    async fn signup_message_format() {
        let svc = seeded_service().await;
        let body = signup(&svc, "Chess Club", "kid@mergington.edu").await.unwrap();
        assert_eq!(body.message, "Signed up kid@mergington.edu for Chess Club");
    }

    #[tokio::test]
    async fn unregister_message_format() {
        let svc = seeded_service().await;
        signup(&svc, "Chess Club", "kid@mergington.edu").await.unwrap();
        let body = unregister(&svc, "Chess Club", "kid@mergington.edu")
            .await
            .unwrap();
        assert_eq!(body.message, "Unregistered kid@mergington.edu from Chess Club");
    }

    #[tokio::test]
    async fn catalog_contains_seeded_activities() {
        let svc = seeded_service().await;
        let snapshot = catalog(&svc).await.unwrap();
        assert!(snapshot.contains_key("Chess Club"));
        assert_eq!(snapshot.len(), 9);
    }
}
