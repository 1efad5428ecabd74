//! HTTP response construction.
//!
//! Everything the API returns is JSON (`{"message": ...}` on success,
//! `{"detail": ...}` on failure) except static assets and the root
//! redirect.

use std::io::Cursor;

use serde::Serialize;

use mhs_core::responses::ErrorDetail;
use mhs_db::error::SignupError;

/// The one concrete response type tiny_http gives us for in-memory bodies.
pub type HttpResponse = tiny_http::Response<Cursor<Vec<u8>>>;

fn header(name: &str, value: &str) -> tiny_http::Header {
    // Infallible for the fixed names/values used below.
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
}

/// Serialize `body` as a JSON response with the given status code.
pub fn json<T: Serialize>(status: u16, body: &T) -> HttpResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|error| {
        tracing::error!(%error, "failed to serialize response body");
        "{}".to_string()
    });
    tiny_http::Response::from_string(body)
        .with_status_code(status)
        .with_header(header("Content-Type", "application/json"))
}

/// A `{"detail": ...}` error body.
pub fn error(status: u16, detail: &str) -> HttpResponse {
    json(
        status,
        &ErrorDetail {
            detail: detail.to_string(),
        },
    )
}

/// A temporary redirect (307, preserving the request method).
pub fn redirect(location: &str) -> HttpResponse {
    tiny_http::Response::from_string("")
        .with_status_code(307)
        .with_header(header("Location", location))
}

/// Map a failed signup/unregister to its HTTP response.
///
/// Expected validation failures carry their stable message as the detail;
/// storage failures are logged and surface as an opaque 500.
pub fn signup_error(err: &SignupError) -> HttpResponse {
    match err {
        SignupError::ActivityNotFound => error(404, &err.to_string()),
        SignupError::AlreadyEnrolled | SignupError::ActivityFull | SignupError::NotEnrolled => {
            error(400, &err.to_string())
        }
        SignupError::Database(db_err) => {
            tracing::error!(error = %db_err, "storage failure during signup operation");
            error(500, "Internal server error")
        }
    }
}
