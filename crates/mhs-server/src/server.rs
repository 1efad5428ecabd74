//! The blocking accept loop and request dispatch.
//!
//! `tiny_http::Server::recv` blocks, so the loop runs on a blocking thread
//! and re-enters the tokio runtime per request via `Handle::block_on` for
//! the async database calls. Requests are processed one at a time; combined
//! with the immediate transactions in mhs-db, signup sequences are fully
//! serialized.

use std::path::PathBuf;

use tokio::runtime::Handle;

use mhs_db::service::ActivityService;

use crate::respond::{self, HttpResponse};
use crate::routes::{self, Route};
use crate::{handlers, statics};

/// Everything the request handlers need.
pub struct AppState {
    pub service: ActivityService,
    pub static_dir: PathBuf,
}

/// Run the accept loop until the server is shut down.
pub fn serve_blocking(server: &tiny_http::Server, handle: &Handle, state: &AppState) {
    for request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();
        tracing::debug!(%method, %url, "request");

        let response = handle.block_on(handle_request(&method, &url, state));
        if let Err(error) = request.respond(response) {
            tracing::warn!(%method, %url, %error, "failed to send response");
        }
    }
}

/// Dispatch one parsed request to its handler and build the response.
pub async fn handle_request(
    method: &tiny_http::Method,
    url: &str,
    state: &AppState,
) -> HttpResponse {
    match routes::parse(method, url) {
        Route::Root => respond::redirect("/static/index.html"),
        Route::Catalog => match handlers::catalog(&state.service).await {
            Ok(catalog) => respond::json(200, &catalog),
            Err(error) => {
                tracing::error!(%error, "storage failure listing catalog");
                respond::error(500, "Internal server error")
            }
        },
        Route::Signup { activity, email } => match email {
            Some(email) => match handlers::signup(&state.service, &activity, &email).await {
                Ok(body) => respond::json(200, &body),
                Err(error) => respond::signup_error(&error),
            },
            None => respond::error(400, "Missing required query parameter: email"),
        },
        Route::Unregister { activity, email } => match email {
            Some(email) => match handlers::unregister(&state.service, &activity, &email).await {
                Ok(body) => respond::json(200, &body),
                Err(error) => respond::signup_error(&error),
            },
            None => respond::error(400, "Missing required query parameter: email"),
        },
        Route::StaticAsset { rel_path } => statics::serve(&state.static_dir, &rel_path),
        Route::MethodNotAllowed => respond::error(405, "Method not allowed"),
        Route::NotFound => respond::error(404, "Not found"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tiny_http::Method;

    use super::*;

    async fn test_state() -> AppState {
        let service = ActivityService::open_local(":memory:").await.unwrap();
        service.seed_activities().await.unwrap();
        AppState {
            service,
            static_dir: PathBuf::from("static"),
        }
    }

    #[tokio::test]
    async fn signup_then_duplicate() {
        let state = test_state().await;

        let ok = handle_request(
            &Method::Post,
            "/activities/Chess%20Club/signup?email=a%40mergington.edu",
            &state,
        )
        .await;
        assert_eq!(ok.status_code().0, 200);

        let dup = handle_request(
            &Method::Post,
            "/activities/Chess%20Club/signup?email=a%40mergington.edu",
            &state,
        )
        .await;
        assert_eq!(dup.status_code().0, 400);
    }

    #[tokio::test]
    async fn unknown_activity_is_404() {
        let state = test_state().await;
        let response = handle_request(
            &Method::Post,
            "/activities/Knitting%20Circle/signup?email=a%40x.com",
            &state,
        )
        .await;
        assert_eq!(response.status_code().0, 404);
    }

    #[tokio::test]
    async fn missing_email_is_400() {
        let state = test_state().await;
        let response =
            handle_request(&Method::Post, "/activities/Chess%20Club/signup", &state).await;
        assert_eq!(response.status_code().0, 400);
    }

    #[tokio::test]
    async fn root_redirects_to_landing_page() {
        let state = test_state().await;
        let response = handle_request(&Method::Get, "/", &state).await;
        assert_eq!(response.status_code().0, 307);
    }
}
