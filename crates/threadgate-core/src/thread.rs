use std::collections::HashMap;

use threadgate_shared::{
    api::{CommentNode, ThreadResponse},
    Caller, Comment, CommentStatus,
};
use uuid::Uuid;

use crate::error::Result;
use crate::store::CommentStore;

/// Visibility of one comment for one caller. Moderators see everything;
/// everyone else sees approved comments plus their own pending ones,
/// matched by display name against the free-text author field.
pub fn visible_to(comment: &Comment, caller: &Caller) -> bool {
    if caller.is_moderator() || comment.status.is_public() {
        return true;
    }
    // Authors see their own pending comments; spam and rejected stay hidden.
    comment.status == CommentStatus::Pending
        && caller.display_name.as_deref() == Some(comment.author.as_str())
}

/// Build the visibility-filtered thread tree from a flat list of comments.
///
/// Roots are ordered newest-first, replies within a node oldest-first, and
/// nesting depth is unbounded. Comments whose parent is missing from the
/// visible set are orphans: they are never surfaced as roots, they simply
/// drop out of the tree.
pub fn assemble(comments: &[Comment], caller: &Caller) -> ThreadResponse {
    let visible: Vec<&Comment> = comments.iter().filter(|c| visible_to(c, caller)).collect();

    // One pass to split roots from replies and index children by parent id,
    // so traversal never rescans the flat list.
    let mut roots: Vec<&Comment> = Vec::new();
    let mut children: HashMap<Uuid, Vec<&Comment>> = HashMap::new();
    for comment in visible {
        match comment.parent_id {
            Some(parent_id) => children.entry(parent_id).or_default().push(comment),
            None => roots.push(comment),
        }
    }

    roots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    for replies in children.values_mut() {
        replies.sort_by_key(|c| c.created_at);
    }

    let roots: Vec<CommentNode> = roots
        .into_iter()
        .map(|c| build_node(c, &children))
        .collect();
    let total_visible = roots.iter().map(count_nodes).sum();

    ThreadResponse {
        roots,
        total_visible,
    }
}

/// Fetch a post's comments from the store and assemble them for the caller.
/// A post with no comments yields an empty thread, not an error.
pub async fn load_thread<S: CommentStore>(
    store: &S,
    post_id: Uuid,
    caller: &Caller,
) -> Result<ThreadResponse> {
    let comments = store.list_by_post(post_id).await?;
    Ok(assemble(&comments, caller))
}

fn build_node(comment: &Comment, children: &HashMap<Uuid, Vec<&Comment>>) -> CommentNode {
    let replies = children
        .get(&comment.id)
        .map(|kids| kids.iter().map(|c| build_node(c, children)).collect())
        .unwrap_or_default();

    CommentNode {
        comment: comment.clone(),
        replies,
    }
}

fn count_nodes(node: &CommentNode) -> usize {
    1 + node.replies.iter().map(count_nodes).sum::<usize>()
}
