use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlacklistKind {
    Word,
    Ip,
    Email,
}

/// One moderation keyword. Only `word` entries gate comment submissions;
/// `ip` and `email` entries belong to other enforcement layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub keyword: String,
    #[serde(rename = "type")]
    pub kind: BlacklistKind,
}
