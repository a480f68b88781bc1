//! Authentication and user profile DTOs.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Indian state the farm is in.
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
    #[serde(default)]
    pub primary_crops: Vec<String>,
}

/// Payload of a successful login/signup response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthData {
    pub user: UserInfo,
    pub token: String,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_language")]
    pub preferred_language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
    #[serde(default)]
    pub primary_crops: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

/// Access level of an account.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_reads_backend_shape() {
        let json = r#"{
            "_id": "66f1a2",
            "name": "Asha",
            "email": "asha@example.com",
            "role": "admin",
            "preferredLanguage": "hi",
            "theme": "dark",
            "location": "Punjab",
            "primaryCrops": ["Wheat", "Rice"]
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "66f1a2");
        assert!(user.role.is_admin());
        assert_eq!(user.preferred_language, "hi");
        assert_eq!(user.primary_crops, vec!["Wheat", "Rice"]);
        assert_eq!(user.farm_size, None);
    }

    #[test]
    fn role_defaults_to_user_when_missing() {
        let json = r#"{"_id": "1", "name": "N", "email": "n@x.in"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.preferred_language, "en");
        assert_eq!(user.theme, "light");
    }
}
