//! Transient user model for directory payloads.
//!
//! The gateway never constructs users of its own; these types exist to carry
//! directory payloads through a request and back out to the caller. Unknown
//! upstream fields are kept in flattened maps so they survive the round trip
//! unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider written when the current app metadata carries none.
pub const DEFAULT_PROVIDER: &str = "email";

/// App-scoped metadata (owned by the directory, per application).
///
/// Role assignment overwrites this mapping wholesale; serialization skips
/// absent fields so a write contains exactly what the gateway set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_admin: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user record as the directory reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// New app metadata for a role assignment.
///
/// Only `provider` survives from the current mapping (defaulting to
/// [`DEFAULT_PROVIDER`] when absent); `role` and `roles` are set from the
/// requested role, `super_admin` only when the caller supplied one. All
/// other fields are dropped.
pub fn merge_role_metadata(
    current: &AppMetadata,
    role: &str,
    super_admin: Option<bool>,
) -> AppMetadata {
    AppMetadata {
        provider: Some(
            current
                .provider
                .clone()
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
        ),
        role: Some(role.to_string()),
        roles: Some(vec![role.to_string()]),
        super_admin,
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_preserves_existing_provider() {
        let current: AppMetadata = serde_json::from_value(json!({
            "provider": "google",
            "role": "viewer",
            "team": "support",
        }))
        .unwrap();

        let merged = merge_role_metadata(&current, "editor", Some(false));

        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({
                "provider": "google",
                "role": "editor",
                "roles": ["editor"],
                "super_admin": false,
            })
        );
    }

    #[test]
    fn merge_defaults_provider_when_absent() {
        let merged = merge_role_metadata(&AppMetadata::default(), "editor", Some(true));

        assert_eq!(merged.provider.as_deref(), Some(DEFAULT_PROVIDER));
        assert_eq!(merged.super_admin, Some(true));
    }

    #[test]
    fn merge_drops_unrelated_fields() {
        let current: AppMetadata = serde_json::from_value(json!({
            "provider": "email",
            "plan": "enterprise",
            "roles": ["viewer", "billing"],
        }))
        .unwrap();

        let merged = merge_role_metadata(&current, "admin", None);

        assert!(merged.extra.is_empty());
        assert_eq!(merged.roles, Some(vec!["admin".to_string()]));
        // The admin shorthand supplies no super_admin, so none is written.
        let value = serde_json::to_value(&merged).unwrap();
        assert!(value.get("super_admin").is_none());
    }

    #[test]
    fn unknown_user_fields_round_trip() {
        let raw = json!({
            "id": "u1",
            "email": "a@b.com",
            "app_metadata": { "provider": "email" },
            "user_metadata": { "name": "Ada" },
            "created_at": "2024-01-01T00:00:00Z",
            "phone": "",
        });

        let user: DirectoryUser = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.extra.get("phone"), Some(&json!("")));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }
}
