use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use userdesk_directory::DirectoryError;

/// Map a collaborator failure to a response.
///
/// Every directory error surfaces as a 500 carrying the directory's own
/// message; there is no retry and no classification.
pub fn directory_error_to_response(err: DirectoryError) -> axum::response::Response {
    tracing::error!("directory call failed: {err}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
