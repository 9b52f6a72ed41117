//! Persistence boundary - the one scalar that outlives a game.
//!
//! The high score is stored as a small JSON record on disk. Storage
//! failures never surface to gameplay: a missing or unreadable file loads
//! as 0 and a failed write leaves the session with its in-memory value.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Stores the persisted high score.
///
/// `save` is called synchronously whenever the score first exceeds the
/// stored value.
pub trait HighScoreStore {
    /// Load the stored high score, 0 if absent
    fn load(&mut self) -> u32;
    /// Persist a new high score
    fn save(&mut self, value: u32);
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// File-backed store keeping the high score as a JSON record
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `.blockfall_highscore.json` in the home directory,
    /// falling back to the current directory when HOME is unset.
    pub fn default_path() -> PathBuf {
        let mut path = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push(".blockfall_highscore.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let record: HighScoreRecord =
            serde_json::from_str(&text).with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(record.high_score)
    }

    fn write_record(&self, value: u32) -> Result<()> {
        let record = HighScoreRecord { high_score: value };
        let text = serde_json::to_string(&record)?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> u32 {
        self.read_record().unwrap_or(0)
    }

    fn save(&mut self, value: u32) {
        // Storage failures degrade to an in-memory high score
        let _ = self.write_record(value);
    }
}

/// In-memory store for tests and sessions without usable storage
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    value: u32,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, value: u32) {
        self.value = value;
    }
}
