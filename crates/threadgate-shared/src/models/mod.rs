mod blacklist;
mod caller;
mod comment;

pub use blacklist::*;
pub use caller::*;
pub use comment::*;
