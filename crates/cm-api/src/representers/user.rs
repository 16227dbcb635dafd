//! User representer

use cm_core::traits::Id;
use cm_models::User;
use serde::Serialize;

/// Public view of a user; never carries the password hash or token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResource {
    pub id: Id,
    pub username: String,
    pub name: String,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}

/// Login response: the user plus the freshly issued token
#[derive(Debug, Clone, Serialize)]
pub struct LoginResource {
    #[serde(flatten)]
    pub user: UserResource,
    pub token: Option<String>,
}

impl From<User> for LoginResource {
    fn from(mut user: User) -> Self {
        let token = user.token.take();
        Self {
            user: user.into(),
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: 7,
            username: "SagAsh".into(),
            password: "$argon2id$hash".into(),
            name: "Sagara".into(),
            token: Some("abc".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_resource_hides_secrets() {
        let json = serde_json::to_value(UserResource::from(user())).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "username": "SagAsh", "name": "Sagara"}));
    }

    #[test]
    fn test_login_resource_includes_token() {
        let json = serde_json::to_value(LoginResource::from(user())).unwrap();
        assert_eq!(json["token"], "abc");
        assert_eq!(json["username"], "SagAsh");
        assert!(json.get("password").is_none());
    }
}
