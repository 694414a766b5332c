use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Spam,
    Rejected,
}

impl CommentStatus {
    /// Whether the comment is shown to regular readers.
    pub fn is_public(self) -> bool {
        matches!(self, CommentStatus::Approved)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub author: String,
    pub content: String,
    pub status: CommentStatus,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CommentStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&CommentStatus::Rejected).unwrap(),
            "\"rejected\""
        );
        let status: CommentStatus = serde_json::from_str("\"spam\"").unwrap();
        assert_eq!(status, CommentStatus::Spam);
    }
}
