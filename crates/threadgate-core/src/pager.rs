use std::collections::HashMap;

use threadgate_shared::api::{CommentNode, ThreadResponse};
use uuid::Uuid;

/// Roots shown before the first "show more" click.
pub const INITIAL_ROOT_WINDOW: usize = 2;
/// How many more roots or replies each click reveals.
pub const WINDOW_STEP: usize = 5;

/// Per-viewer-session pagination state over an assembled thread.
///
/// The window counters live outside the entity model: the assembler's tree is
/// immutable, and each viewer advances or resets their own windows
/// independently. Reply windows start empty and are keyed by node id.
#[derive(Debug, Clone)]
pub struct ThreadPager {
    root_window: usize,
    reply_windows: HashMap<Uuid, usize>,
}

impl Default for ThreadPager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadPager {
    pub fn new() -> Self {
        Self {
            root_window: INITIAL_ROOT_WINDOW,
            reply_windows: HashMap::new(),
        }
    }

    pub fn root_window(&self) -> usize {
        self.root_window
    }

    pub fn reply_window(&self, id: Uuid) -> usize {
        self.reply_windows.get(&id).copied().unwrap_or(0)
    }

    pub fn show_more_roots(&mut self) {
        self.root_window += WINDOW_STEP;
    }

    pub fn show_less_roots(&mut self) {
        self.root_window = INITIAL_ROOT_WINDOW;
    }

    /// Reveal up to five more replies under one node, cumulative per click.
    pub fn show_more_replies(&mut self, id: Uuid) {
        *self.reply_windows.entry(id).or_insert(0) += WINDOW_STEP;
    }

    pub fn hide_replies(&mut self, id: Uuid) {
        self.reply_windows.remove(&id);
    }

    /// Apply the current windows to an assembled thread without mutating it.
    pub fn paginate(&self, thread: &ThreadResponse) -> ThreadResponse {
        ThreadResponse {
            roots: thread
                .roots
                .iter()
                .take(self.root_window)
                .map(|node| self.clip(node))
                .collect(),
            total_visible: thread.total_visible,
        }
    }

    fn clip(&self, node: &CommentNode) -> CommentNode {
        CommentNode {
            comment: node.comment.clone(),
            replies: node
                .replies
                .iter()
                .take(self.reply_window(node.comment.id))
                .map(|reply| self.clip(reply))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use threadgate_shared::{Comment, CommentStatus};

    fn node(replies: Vec<CommentNode>) -> CommentNode {
        CommentNode {
            comment: Comment {
                id: Uuid::new_v4(),
                post_id: Uuid::nil(),
                parent_id: None,
                author: "a".to_string(),
                content: "text".to_string(),
                status: CommentStatus::Approved,
                is_admin: false,
                created_at: Utc::now(),
            },
            replies,
        }
    }

    fn thread_with_roots(count: usize) -> ThreadResponse {
        ThreadResponse {
            roots: (0..count).map(|_| node(Vec::new())).collect(),
            total_visible: count,
        }
    }

    #[test]
    fn root_window_grows_and_resets() {
        let thread = thread_with_roots(7);
        let mut pager = ThreadPager::new();

        assert_eq!(pager.paginate(&thread).roots.len(), 2);

        pager.show_more_roots();
        assert_eq!(pager.paginate(&thread).roots.len(), 7);

        pager.show_less_roots();
        assert_eq!(pager.paginate(&thread).roots.len(), 2);
    }

    #[test]
    fn replies_start_hidden_and_reveal_in_steps() {
        let replies: Vec<CommentNode> = (0..8).map(|_| node(Vec::new())).collect();
        let root = node(replies);
        let root_id = root.comment.id;
        let thread = ThreadResponse {
            roots: vec![root],
            total_visible: 9,
        };

        let mut pager = ThreadPager::new();
        assert!(pager.paginate(&thread).roots[0].replies.is_empty());

        pager.show_more_replies(root_id);
        assert_eq!(pager.paginate(&thread).roots[0].replies.len(), 5);

        pager.show_more_replies(root_id);
        assert_eq!(pager.paginate(&thread).roots[0].replies.len(), 8);

        pager.hide_replies(root_id);
        assert!(pager.paginate(&thread).roots[0].replies.is_empty());
    }

    #[test]
    fn reply_windows_are_independent_per_node() {
        let first = node((0..6).map(|_| node(Vec::new())).collect());
        let second = node((0..6).map(|_| node(Vec::new())).collect());
        let first_id = first.comment.id;
        let thread = ThreadResponse {
            roots: vec![first, second],
            total_visible: 14,
        };

        let mut pager = ThreadPager::new();
        pager.show_more_replies(first_id);

        let view = pager.paginate(&thread);
        assert_eq!(view.roots[0].replies.len(), 5);
        assert!(view.roots[1].replies.is_empty());
    }

    #[test]
    fn pagination_does_not_change_total_visible() {
        let thread = thread_with_roots(7);
        let pager = ThreadPager::new();
        assert_eq!(pager.paginate(&thread).total_visible, 7);
    }
}
