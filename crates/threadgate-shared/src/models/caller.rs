use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

/// Per-request caller identity supplied by the external auth layer.
/// `role` is authoritative; `display_name` is free text and only used
/// for weak ownership matching against the comment's `author` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caller {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Caller {
    pub fn admin(display_name: impl Into<String>) -> Self {
        Self {
            role: Role::Admin,
            display_name: Some(display_name.into()),
        }
    }

    pub fn user(display_name: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            display_name: Some(display_name.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            role: Role::Guest,
            display_name: None,
        }
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Admin
    }
}
