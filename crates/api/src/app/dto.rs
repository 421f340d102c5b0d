use serde::Deserialize;
use serde_json::{Map, Value};

// -------------------------
// Request DTOs
// -------------------------
//
// Fields are optional on purpose: a missing required field must yield a 400
// from the handler, not a deserialization rejection.

#[derive(Debug, Deserialize)]
pub struct UserIdRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetUserByEmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetUserRoleRequest {
    pub email: Option<String>,
    pub role: Option<String>,
    pub super_admin: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SetAdminRoleRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserMetadataRequest {
    pub user_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}
