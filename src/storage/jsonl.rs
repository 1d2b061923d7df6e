//! Line-delimited JSON files, one record per line.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};

/// The record kinds kept on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Player,
    SkillAssessment,
    Leaderboard,
}

impl EntityType {
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Player => "players.jsonl",
            EntityType::SkillAssessment => "skill_assessments.jsonl",
            EntityType::Leaderboard => "leaderboard.jsonl",
        }
    }
}

/// Writes a whole collection of `T`, replacing the file.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _record: PhantomData<fn(&T)>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.entity_path(entity))
    }

    /// Serialize every record and swap the file in. Returns the record count.
    ///
    /// Records are written to a sibling `.tmp` file, then renamed over the
    /// target.
    pub fn write_all(&self, records: &[T]) -> Result<usize, StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension("jsonl.tmp");
        let mut out = BufWriter::new(File::create(&tmp)?);
        for record in records {
            serde_json::to_writer(&mut out, record)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        drop(out);
        fs::rename(&tmp, &self.path)?;

        info!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(records.len())
    }
}

/// Reads a collection of `T`. A missing file is an empty collection.
pub struct JsonlReader<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.entity_path(entity))
    }

    /// Every record that parses. Malformed lines are logged and skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        let mut records = Vec::new();
        for (line_no, line) in self.lines()? {
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    "Skipping {}:{}: {}",
                    self.path.display(),
                    line_no,
                    e
                ),
            }
        }

        debug!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Number of non-blank lines, parsed or not.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.lines()?.len())
    }

    /// Non-blank lines with their 1-based line numbers.
    fn lines(&self) -> Result<Vec<(usize, String)>, StorageError> {
        let Some(file) = open_if_exists(&self.path)? else {
            return Ok(Vec::new());
        };

        let mut lines = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push((i + 1, line));
            }
        }
        Ok(lines)
    }
}

fn open_if_exists(path: &Path) -> Result<Option<File>, StorageError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
