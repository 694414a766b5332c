use std::sync::Arc;

use threadgate_shared::{
    api::{EditCommentRequest, SubmitCommentRequest},
    BlacklistKind, Caller, Comment, CommentStatus,
};
use uuid::Uuid;

use crate::blacklist::BlacklistProvider;
use crate::error::{CommentError, Result};
use crate::store::{CommentDraft, CommentPatch, CommentStore};

/// Decides the initial status of incoming comments and carries out the
/// manual transitions used by moderators. Collaborators are injected, so
/// the gate holds no global state.
pub struct ModerationGate<S, B> {
    store: Arc<S>,
    blacklist: Arc<B>,
}

impl<S, B> ModerationGate<S, B>
where
    S: CommentStore,
    B: BlacklistProvider,
{
    pub fn new(store: Arc<S>, blacklist: Arc<B>) -> Self {
        Self { store, blacklist }
    }

    /// Submit a new comment. Admin authors bypass the blacklist entirely;
    /// everyone else is held as `pending` on any keyword match, otherwise
    /// auto-approved.
    pub async fn submit(&self, caller: &Caller, req: SubmitCommentRequest) -> Result<Comment> {
        let content = req.content.trim();
        if content.is_empty() {
            return Err(CommentError::Validation(
                "Comment content is required".to_string(),
            ));
        }

        // Authenticated callers fall back to their display name; anonymous
        // submissions must carry an author.
        let author = match req
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
        {
            Some(a) => a.to_string(),
            None => caller.display_name.clone().ok_or_else(|| {
                CommentError::Validation("Author name is required".to_string())
            })?,
        };

        // A reply must point at an existing comment on the same post.
        if let Some(parent_id) = req.parent_id {
            let on_post = self.store.list_by_post(req.post_id).await?;
            if !on_post.iter().any(|c| c.id == parent_id) {
                return Err(CommentError::NotFound);
            }
        }

        let (status, is_admin) = if caller.is_moderator() {
            (CommentStatus::Approved, true)
        } else {
            (self.screen(&author, content).await?, false)
        };

        if status == CommentStatus::Pending {
            tracing::debug!(%author, "comment held for moderation");
        }

        self.store
            .create(CommentDraft {
                post_id: req.post_id,
                parent_id: req.parent_id,
                author,
                content: content.to_string(),
                status,
                is_admin,
            })
            .await
    }

    /// Case-insensitive substring match of every word-type blacklist entry
    /// against content and author. The list is fetched fresh per submission.
    async fn screen(&self, author: &str, content: &str) -> Result<CommentStatus> {
        let entries = self.blacklist.entries().await?;
        let author = author.to_lowercase();
        let content = content.to_lowercase();

        let flagged = entries
            .iter()
            .filter(|e| e.kind == BlacklistKind::Word && !e.keyword.is_empty())
            .any(|e| {
                let keyword = e.keyword.to_lowercase();
                content.contains(&keyword) || author.contains(&keyword)
            });

        Ok(if flagged {
            CommentStatus::Pending
        } else {
            CommentStatus::Approved
        })
    }

    pub async fn approve(&self, caller: &Caller, id: Uuid) -> Result<Comment> {
        require_moderator(caller)?;
        self.store.update_status(id, CommentStatus::Approved).await
    }

    /// Single hide/unhide toggle keyed off the current status: an approved
    /// comment becomes rejected, anything else becomes approved. Hiding and
    /// then unhiding an approved comment restores it.
    pub async fn toggle_hidden(&self, caller: &Caller, id: Uuid) -> Result<Comment> {
        require_moderator(caller)?;
        let current = self.store.get(id).await?;
        let next = match current.status {
            CommentStatus::Approved => CommentStatus::Rejected,
            _ => CommentStatus::Approved,
        };
        self.store.update_status(id, next).await
    }

    pub async fn mark_spam(&self, caller: &Caller, id: Uuid) -> Result<Comment> {
        require_moderator(caller)?;
        self.store.update_status(id, CommentStatus::Spam).await
    }

    /// Moderator edit of author and/or content.
    pub async fn edit(&self, caller: &Caller, id: Uuid, req: EditCommentRequest) -> Result<Comment> {
        require_moderator(caller)?;

        if let Some(content) = req.content.as_deref() {
            if content.trim().is_empty() {
                return Err(CommentError::Validation(
                    "Comment content is required".to_string(),
                ));
            }
        }
        if let Some(author) = req.author.as_deref() {
            if author.trim().is_empty() {
                return Err(CommentError::Validation(
                    "Author name is required".to_string(),
                ));
            }
        }

        self.store
            .update_fields(
                id,
                CommentPatch {
                    author: req.author,
                    content: req.content,
                },
            )
            .await
    }

    /// Moderator delete of a single comment. Replies are left in place with
    /// their parent_id dangling; the assembler drops them as orphans.
    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<()> {
        require_moderator(caller)?;
        self.store.delete(id).await?;
        tracing::info!(%id, "comment deleted");
        Ok(())
    }
}

fn require_moderator(caller: &Caller) -> Result<()> {
    if caller.is_moderator() {
        Ok(())
    } else {
        Err(CommentError::Unauthorized)
    }
}
