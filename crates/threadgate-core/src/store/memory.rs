use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use threadgate_shared::{Comment, CommentStatus};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CommentError, Result};

use super::{CommentDraft, CommentPatch, CommentStore};

/// In-process `CommentStore` backed by a `HashMap`. Used by the test suite
/// and by embedders that do not need durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<Uuid, Comment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn create(&self, draft: CommentDraft) -> Result<Comment> {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: draft.post_id,
            parent_id: draft.parent_id,
            author: draft.author,
            content: draft.content,
            status: draft.status,
            is_admin: draft.is_admin,
            created_at: Utc::now(),
        };

        self.rows.write().await.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn get(&self, id: Uuid) -> Result<Comment> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CommentError::NotFound)
    }

    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: Uuid, status: CommentStatus) -> Result<Comment> {
        let mut rows = self.rows.write().await;
        let comment = rows.get_mut(&id).ok_or(CommentError::NotFound)?;
        comment.status = status;
        Ok(comment.clone())
    }

    async fn update_fields(&self, id: Uuid, patch: CommentPatch) -> Result<Comment> {
        let mut rows = self.rows.write().await;
        let comment = rows.get_mut(&id).ok_or(CommentError::NotFound)?;
        if let Some(author) = patch.author {
            comment.author = author;
        }
        if let Some(content) = patch.content {
            comment.content = content;
        }
        Ok(comment.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        // Removes exactly one row; replies keep their dangling parent_id.
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(CommentError::NotFound)
    }
}
