//! Admin routes relaying user-lifecycle mutations to the directory.
//!
//! Each handler validates its required inputs, issues exactly one directory
//! call, and maps the outcome to a response. No state survives a request.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use userdesk_directory::{merge_role_metadata, DirectoryUser, UserDirectory};

use crate::app::{dto, errors};

/// Presence check with the same semantics for absent and empty fields.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// POST /api/deleteUser - remove a user from the directory
pub async fn delete_user(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Json(body): Json<dto::UserIdRequest>,
) -> axum::response::Response {
    let Some(user_id) = present(&body.user_id) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "user_id required");
    };

    match directory.delete_user(user_id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "User deleted" }))).into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}

/// GET /api/listUsers - list every user in the directory
pub async fn list_users(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
) -> axum::response::Response {
    match directory.list_users().await {
        Ok(users) => (StatusCode::OK, Json(json!({ "users": users }))).into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}

/// POST /api/disableUser - ban a user
pub async fn disable_user(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Json(body): Json<dto::UserIdRequest>,
) -> axum::response::Response {
    set_banned(directory, body, true, "User disabled").await
}

/// POST /api/enableUser - lift a user's ban
pub async fn enable_user(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Json(body): Json<dto::UserIdRequest>,
) -> axum::response::Response {
    set_banned(directory, body, false, "User enabled").await
}

async fn set_banned(
    directory: Arc<dyn UserDirectory>,
    body: dto::UserIdRequest,
    banned: bool,
    message: &str,
) -> axum::response::Response {
    let Some(user_id) = present(&body.user_id) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "user_id required");
    };

    match directory.set_banned(user_id, banned).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "message": message }))).into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}

/// GET /api/getUserByEmail?email= - look a user up by email
///
/// Zero matches is not an error here: the caller gets `{"user": null}` with
/// a 200. Extra matches beyond the first are ignored.
pub async fn get_user_by_email(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Query(query): Query<dto::GetUserByEmailQuery>,
) -> axum::response::Response {
    let Some(email) = present(&query.email) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "email required");
    };

    match directory.find_by_email(email).await {
        Ok(matches) => {
            let user = matches.into_iter().next();
            (StatusCode::OK, Json(json!({ "user": user }))).into_response()
        }
        Err(e) => errors::directory_error_to_response(e),
    }
}

/// POST /api/setUserRole - assign a role, overwriting app metadata
///
/// An absent `super_admin` is written as `false`.
pub async fn set_user_role(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Json(body): Json<dto::SetUserRoleRequest>,
) -> axum::response::Response {
    let Some(email) = present(&body.email) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "email required");
    };
    let Some(role) = present(&body.role) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "role required");
    };

    let super_admin = body.super_admin.unwrap_or(false);
    assign_role(directory, email, role, Some(super_admin), "Role updated").await
}

/// POST /api/setAdminRole - shorthand for assigning the admin role
pub async fn set_admin_role(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Json(body): Json<dto::SetAdminRoleRequest>,
) -> axum::response::Response {
    let Some(email) = present(&body.email) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "email required");
    };

    assign_role(directory, email, "admin", None, "Admin role granted").await
}

/// Shared tail of the role-assignment routes: look the user up by email,
/// then overwrite the app metadata, keeping only the current provider.
async fn assign_role(
    directory: Arc<dyn UserDirectory>,
    email: &str,
    role: &str,
    super_admin: Option<bool>,
    message: &str,
) -> axum::response::Response {
    let user = match lookup_by_email(&directory, email).await {
        Ok(Some(user)) => user,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "User not found"),
        Err(resp) => return resp,
    };

    let app_metadata = merge_role_metadata(&user.app_metadata, role, super_admin);

    match directory.update_app_metadata(&user.id, app_metadata).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(json!({ "message": message, "user": updated })),
        )
            .into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}

async fn lookup_by_email(
    directory: &Arc<dyn UserDirectory>,
    email: &str,
) -> Result<Option<DirectoryUser>, axum::response::Response> {
    match directory.find_by_email(email).await {
        Ok(matches) => Ok(matches.into_iter().next()),
        Err(e) => Err(errors::directory_error_to_response(e)),
    }
}

/// POST /api/updateUserMetadata - overwrite user-level metadata wholesale
///
/// This is a full replace, not a merge: fields absent from the supplied
/// mapping are lost.
pub async fn update_user_metadata(
    Extension(directory): Extension<Arc<dyn UserDirectory>>,
    Json(body): Json<dto::UpdateUserMetadataRequest>,
) -> axum::response::Response {
    let Some(user_id) = present(&body.user_id) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "user_id required");
    };
    let Some(metadata) = body.metadata else {
        return errors::json_error(StatusCode::BAD_REQUEST, "metadata required");
    };

    match directory.update_user_metadata(user_id, metadata).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(json!({ "message": "Metadata updated", "user": updated })),
        )
            .into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}
