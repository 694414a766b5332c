#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("Moderator access required")]
    Unauthorized,

    #[error("Comment not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CommentError>;
