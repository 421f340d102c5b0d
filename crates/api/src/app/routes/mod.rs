use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use userdesk_directory::UserDirectory;

use crate::middleware::{self, AdminKeyState};

pub mod system;
pub mod users;

/// The gateway's fixed route table, mounted under `/api`.
///
/// Every route except `/ping` sits behind the shared-secret check.
pub fn router(auth: AdminKeyState, directory: Arc<dyn UserDirectory>) -> Router {
    let protected = Router::new()
        .route("/deleteUser", post(users::delete_user))
        .route("/listUsers", get(users::list_users))
        .route("/disableUser", post(users::disable_user))
        .route("/enableUser", post(users::enable_user))
        .route("/getUserByEmail", get(users::get_user_by_email))
        .route("/setUserRole", post(users::set_user_role))
        .route("/setAdminRole", post(users::set_admin_role))
        .route("/updateUserMetadata", post(users::update_user_metadata))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            middleware::admin_key_middleware,
        ))
        .layer(Extension(directory));

    Router::new()
        .route("/ping", get(system::ping))
        .merge(protected)
}
