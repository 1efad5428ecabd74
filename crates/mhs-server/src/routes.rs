//! Route parsing for the activities API.
//!
//! Pure `&str`-in, `Route`-out so the dispatch table is unit-testable
//! without sockets. Path segments are percent-decoded; query parameters
//! use form-style encoding (`+` as space).

use tiny_http::Method;

/// A parsed request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /` — redirect to the static landing page.
    Root,
    /// `GET /activities` — the full catalog.
    Catalog,
    /// `POST /activities/{name}/signup?email=...`
    Signup {
        activity: String,
        email: Option<String>,
    },
    /// `DELETE /activities/{name}/unregister?email=...`
    Unregister {
        activity: String,
        email: Option<String>,
    },
    /// `GET /static/{path}`
    StaticAsset { rel_path: String },
    /// Known path, wrong method.
    MethodNotAllowed,
    /// Everything else.
    NotFound,
}

/// Parse a request line into a [`Route`].
pub fn parse(method: &Method, url: &str) -> Route {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    if path == "/" {
        return if *method == Method::Get {
            Route::Root
        } else {
            Route::MethodNotAllowed
        };
    }

    if let Some(rel_path) = path.strip_prefix("/static/") {
        return if *method == Method::Get {
            Route::StaticAsset {
                rel_path: decode_segment(rel_path),
            }
        } else {
            Route::MethodNotAllowed
        };
    }

    let segments: Vec<&str> = path
        .strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .collect();

    match segments.as_slice() {
        ["activities"] => {
            if *method == Method::Get {
                Route::Catalog
            } else {
                Route::MethodNotAllowed
            }
        }
        ["activities", name, "signup"] => {
            if *method == Method::Post {
                Route::Signup {
                    activity: decode_segment(name),
                    email: query_param(query, "email"),
                }
            } else {
                Route::MethodNotAllowed
            }
        }
        ["activities", name, "unregister"] => {
            if *method == Method::Delete {
                Route::Unregister {
                    activity: decode_segment(name),
                    email: query_param(query, "email"),
                }
            } else {
                Route::MethodNotAllowed
            }
        }
        _ => Route::NotFound,
    }
}

/// Percent-decode a path segment, falling back to the raw text when the
/// encoding is not valid UTF-8.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}

/// Extract one query parameter, form-decoded. Empty values count as absent.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name && !value.is_empty() {
            return Some(decode_segment(&value.replace('+', " ")));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn root_redirect_route() {
        assert_eq!(parse(&Method::Get, "/"), Route::Root);
    }

    #[test]
    fn catalog_route() {
        assert_eq!(parse(&Method::Get, "/activities"), Route::Catalog);
        assert_eq!(parse(&Method::Post, "/activities"), Route::MethodNotAllowed);
    }

    #[test]
    fn signup_route_decodes_name_and_email() {
        let route = parse(
            &Method::Post,
            "/activities/Chess%20Club/signup?email=kid%40mergington.edu",
        );
        assert_eq!(
            route,
            Route::Signup {
                activity: "Chess Club".to_string(),
                email: Some("kid@mergington.edu".to_string()),
            }
        );
    }

    #[test]
    fn signup_without_email_parses_as_absent() {
        let route = parse(&Method::Post, "/activities/Chess%20Club/signup");
        assert_eq!(
            route,
            Route::Signup {
                activity: "Chess Club".to_string(),
                email: None,
            }
        );

        let empty = parse(&Method::Post, "/activities/Chess%20Club/signup?email=");
        assert_eq!(
            empty,
            Route::Signup {
                activity: "Chess Club".to_string(),
                email: None,
            }
        );
    }

    #[test]
    fn unregister_route_requires_delete() {
        let route = parse(
            &Method::Delete,
            "/activities/Math%20Club/unregister?email=a%40x.com",
        );
        assert_eq!(
            route,
            Route::Unregister {
                activity: "Math Club".to_string(),
                email: Some("a@x.com".to_string()),
            }
        );
        assert_eq!(
            parse(&Method::Get, "/activities/Math%20Club/unregister?email=a%40x.com"),
            Route::MethodNotAllowed
        );
    }

    #[test]
    fn plus_decodes_to_space_in_query() {
        let route = parse(&Method::Post, "/activities/Art%20Club/signup?email=a+b%40x.com");
        assert_eq!(
            route,
            Route::Signup {
                activity: "Art Club".to_string(),
                email: Some("a b@x.com".to_string()),
            }
        );
    }

    #[test]
    fn static_asset_route() {
        assert_eq!(
            parse(&Method::Get, "/static/index.html"),
            Route::StaticAsset {
                rel_path: "index.html".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(parse(&Method::Get, "/teachers"), Route::NotFound);
        assert_eq!(parse(&Method::Get, "/activities/Chess%20Club"), Route::NotFound);
        assert_eq!(
            parse(&Method::Get, "/activities/Chess%20Club/signup/extra"),
            Route::NotFound
        );
    }
}
