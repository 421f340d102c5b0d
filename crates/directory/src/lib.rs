//! `userdesk-directory` — client seam for the hosted user directory.
//!
//! This crate is intentionally decoupled from the HTTP server: it defines the
//! admin operations the gateway relays, the transient user model, and a REST
//! client for the directory's admin API.

pub mod error;
pub mod rest;
pub mod user;

pub use error::DirectoryError;
pub use rest::RestDirectory;
pub use user::{merge_role_metadata, AppMetadata, DirectoryUser};

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Admin operations exposed by the user directory.
///
/// One immutable instance is constructed at startup and shared by every
/// request handler; implementations hold no per-request state. Each gateway
/// route issues exactly one call through this trait.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Permanently remove a user.
    async fn delete_user(&self, user_id: &str) -> Result<(), DirectoryError>;

    /// List all users known to the directory.
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, DirectoryError>;

    /// Ban or unban a user.
    async fn set_banned(&self, user_id: &str, banned: bool)
        -> Result<DirectoryUser, DirectoryError>;

    /// Users whose email matches exactly. Callers that need a single user
    /// take the first element.
    async fn find_by_email(&self, email: &str) -> Result<Vec<DirectoryUser>, DirectoryError>;

    /// Overwrite the user's app-scoped metadata wholesale.
    async fn update_app_metadata(
        &self,
        user_id: &str,
        app_metadata: AppMetadata,
    ) -> Result<DirectoryUser, DirectoryError>;

    /// Overwrite the user's user-scoped metadata wholesale (full replace,
    /// never a merge).
    async fn update_user_metadata(
        &self,
        user_id: &str,
        metadata: Map<String, Value>,
    ) -> Result<DirectoryUser, DirectoryError>;
}
