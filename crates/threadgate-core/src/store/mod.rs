mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use threadgate_shared::{Comment, CommentStatus};
use uuid::Uuid;

use crate::error::Result;

/// A fully moderated comment ready to be persisted. The gate decides
/// `status` and `is_admin`; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author: String,
    pub content: String,
    pub status: CommentStatus,
    pub is_admin: bool,
}

/// Partial update restricted to the editable fields.
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Data-access contract for comment rows. Implementations carry no
/// moderation or threading logic; every operation on a missing id fails
/// with `NotFound`, and `delete` removes exactly one row without touching
/// descendants.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn create(&self, draft: CommentDraft) -> Result<Comment>;

    async fn get(&self, id: Uuid) -> Result<Comment>;

    /// Every comment on the post, across all statuses, in no particular order.
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>>;

    async fn update_status(&self, id: Uuid, status: CommentStatus) -> Result<Comment>;

    async fn update_fields(&self, id: Uuid, patch: CommentPatch) -> Result<Comment>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}
