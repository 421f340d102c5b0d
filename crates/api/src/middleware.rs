use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::errors;

/// Header carrying the admin shared secret.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Configured shared secret the gateway compares against.
///
/// This is a single static secret, not per-user credentials: any caller
/// presenting it has full administrative power over every account.
#[derive(Clone)]
pub struct AdminKeyState {
    pub admin_key: Arc<str>,
}

/// Gate for every admin route: exact-match the `x-admin-key` header against
/// the configured secret before the handler (and its directory call) runs.
pub async fn admin_key_middleware(
    State(state): State<AdminKeyState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if !key_matches(req.headers(), &state.admin_key) {
        return errors::json_error(StatusCode::UNAUTHORIZED, "Not authorized");
    }

    next.run(req).await
}

fn key_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(ADMIN_KEY_HEADER, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn matching_key_is_accepted() {
        assert!(key_matches(&headers_with(Some("s3cret")), "s3cret"));
    }

    #[test]
    fn absent_or_mismatched_key_is_rejected() {
        assert!(!key_matches(&headers_with(None), "s3cret"));
        assert!(!key_matches(&headers_with(Some("wrong")), "s3cret"));
        assert!(!key_matches(&headers_with(Some("")), "s3cret"));
    }

    #[test]
    fn non_utf8_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            ADMIN_KEY_HEADER,
            HeaderValue::from_bytes(b"\xffs3cret").unwrap(),
        );
        assert!(!key_matches(&headers, "s3cret"));
    }
}
