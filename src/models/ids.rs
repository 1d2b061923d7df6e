//! Stable player ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::normalize_name;

const ID_LEN: usize = 16;

/// Hex prefix of `sha256("<namespace>|<normalized name>")`.
///
/// Real players and assessment placeholders hash under different namespaces,
/// so a placeholder never collides with the player who later claims the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    fn hashed(namespace: &str, name: &str) -> Self {
        let key = format!("{}|{}", namespace, normalize_name(name));
        let mut digest = hex::encode(Sha256::digest(key.as_bytes()));
        digest.truncate(ID_LEN);
        Self(digest)
    }

    pub fn for_player(name: &str) -> Self {
        Self::hashed("player", name)
    }

    /// Id of a player synthesized from an unmatched skill assessment.
    pub fn for_assessment(username: &str) -> Self {
        Self::hashed("assessment", username)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlayerId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
