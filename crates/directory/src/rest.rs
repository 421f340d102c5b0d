//! REST client for the directory's admin API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::DirectoryError;
use crate::user::{AppMetadata, DirectoryUser};
use crate::UserDirectory;

/// Client for the directory's admin REST endpoints.
///
/// Constructed once at startup from configuration; one HTTP client is reused
/// for every call. No retries, and no timeout beyond the transport default.
pub struct RestDirectory {
    base_url: String,
    service_key: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct UserList {
    users: Vec<DirectoryUser>,
}

impl RestDirectory {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            http: reqwest::Client::new(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/admin/users", self.base_url)
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/admin/users/{}", self.base_url, user_id)
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, DirectoryError> {
        let resp = req
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        tracing::warn!("directory error ({status}): {message}");
        Err(DirectoryError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_user(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<DirectoryUser, DirectoryError> {
        self.send(req)
            .await?
            .json()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))
    }

    async fn update_user(
        &self,
        user_id: &str,
        attributes: Value,
    ) -> Result<DirectoryUser, DirectoryError> {
        self.fetch_user(self.http.put(self.user_url(user_id)).json(&attributes))
            .await
    }
}

/// Pull the directory's own error text out of a failure body, falling back
/// to the raw body and finally the status code.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("directory returned status {status}")
    } else {
        body.to_string()
    }
}

#[async_trait]
impl UserDirectory for RestDirectory {
    async fn delete_user(&self, user_id: &str) -> Result<(), DirectoryError> {
        self.send(self.http.delete(self.user_url(user_id))).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let list: UserList = self
            .send(self.http.get(self.users_url()))
            .await?
            .json()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;
        Ok(list.users)
    }

    async fn set_banned(
        &self,
        user_id: &str,
        banned: bool,
    ) -> Result<DirectoryUser, DirectoryError> {
        self.update_user(user_id, json!({ "banned": banned })).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<DirectoryUser>, DirectoryError> {
        // The admin list endpoint has no server-side email filter; fetch the
        // list and filter here.
        let users = self.list_users().await?;
        Ok(users
            .into_iter()
            .filter(|u| u.email.as_deref() == Some(email))
            .collect())
    }

    async fn update_app_metadata(
        &self,
        user_id: &str,
        app_metadata: AppMetadata,
    ) -> Result<DirectoryUser, DirectoryError> {
        self.update_user(user_id, json!({ "app_metadata": app_metadata }))
            .await
    }

    async fn update_user_metadata(
        &self,
        user_id: &str,
        metadata: Map<String, Value>,
    ) -> Result<DirectoryUser, DirectoryError> {
        self.update_user(user_id, json!({ "user_metadata": metadata }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = RestDirectory::new("https://id.example.com/", "svc-key");
        assert_eq!(client.users_url(), "https://id.example.com/admin/users");
        assert_eq!(
            client.user_url("u1"),
            "https://id.example.com/admin/users/u1"
        );
    }

    #[test]
    fn error_message_prefers_directory_text() {
        assert_eq!(
            error_message(404, r#"{"msg":"user not found"}"#),
            "user not found"
        );
        assert_eq!(
            error_message(500, r#"{"error":"boom","code":500}"#),
            "boom"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(error_message(502, "bad gateway"), "bad gateway");
        assert_eq!(error_message(502, "  "), "directory returned status 502");
    }
}
