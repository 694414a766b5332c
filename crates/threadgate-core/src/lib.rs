pub mod blacklist;
pub mod error;
pub mod gate;
pub mod pager;
pub mod store;
pub mod thread;

pub use blacklist::{BlacklistProvider, MemoryBlacklist};
pub use error::{CommentError, Result};
pub use gate::ModerationGate;
pub use pager::ThreadPager;
pub use store::{CommentDraft, CommentPatch, CommentStore, MemoryStore};
pub use thread::{assemble, load_thread};
