//! Filesystem roster storage.
//!
//! Layout under the data directory:
//! - `normalized/`: players and skill assessments (JSONL, source of truth)
//! - `derived/`: the merged, ranked leaderboard written by `rank`

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the roster files live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn normalized_dir(&self) -> PathBuf {
        self.data_dir.join("normalized")
    }

    pub fn derived_dir(&self) -> PathBuf {
        self.data_dir.join("derived")
    }

    /// Path of the file holding `entity`.
    pub fn entity_path(&self, entity: EntityType) -> PathBuf {
        let dir = match entity {
            EntityType::Player | EntityType::SkillAssessment => self.normalized_dir(),
            EntityType::Leaderboard => self.derived_dir(),
        };
        dir.join(entity.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.normalized_dir(), PathBuf::from("/data/normalized"));
        assert_eq!(config.derived_dir(), PathBuf::from("/data/derived"));
    }

    #[test]
    fn test_entity_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(
            config.entity_path(EntityType::Player),
            PathBuf::from("/data/normalized/players.jsonl")
        );
        assert_eq!(
            config.entity_path(EntityType::SkillAssessment),
            PathBuf::from("/data/normalized/skill_assessments.jsonl")
        );
        assert_eq!(
            config.entity_path(EntityType::Leaderboard),
            PathBuf::from("/data/derived/leaderboard.jsonl")
        );
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
