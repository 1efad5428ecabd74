//! Static asset serving for the landing page and its assets.

use std::path::{Component, Path};

use crate::respond::{self, HttpResponse};

/// Serve one file from the static directory.
///
/// Rejects any path that would escape the directory (absolute paths or
/// `..` components). An empty path serves `index.html`.
pub fn serve(static_dir: &Path, rel_path: &str) -> HttpResponse {
    let rel_path = if rel_path.is_empty() {
        "index.html"
    } else {
        rel_path
    };

    if !is_safe(rel_path) {
        return respond::error(404, "Not found");
    }

    let full_path = static_dir.join(rel_path);
    match std::fs::read(&full_path) {
        Ok(data) => tiny_http::Response::from_data(data).with_header(
            tiny_http::Header::from_bytes("Content-Type", content_type(rel_path)).unwrap(),
        ),
        Err(error) => {
            tracing::debug!(path = %full_path.display(), %error, "static asset miss");
            respond::error(404, "Not found")
        }
    }
}

fn is_safe(rel_path: &str) -> bool {
    Path::new(rel_path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

fn content_type(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
