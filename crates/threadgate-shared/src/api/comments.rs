use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Comment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommentRequest {
    pub post_id: Uuid,
    /// Optional for authenticated callers (defaults to their display name),
    /// required for anonymous submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

/// Moderator edit of an existing comment; only author and content are
/// editable, everything else is immutable after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// One comment plus its visible replies, oldest reply first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<CommentNode>,
}

/// The assembled thread for one post: visible roots newest-first, plus the
/// count of every comment reachable in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub roots: Vec<CommentNode>,
    pub total_visible: usize,
}
