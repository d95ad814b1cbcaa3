use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access score file: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Scalar score persistence. The game cores only ever compare-and-update a
/// handful of integers (best score, per-category level), so the interface
/// stays deliberately tiny: absent keys read as 0, writes cannot fail from
/// the cores' point of view.
pub trait ScoreStore {
    fn get(&self, key: &str) -> i64;
    fn set(&mut self, key: &str, value: i64);
}

/// HashMap-backed store. Default for tests and non-persistent runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    values: HashMap<String, i64>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }
}

/// File-backed store: one JSON object of key -> integer.
///
/// Values are read once on `open` and mutated in memory; nothing touches
/// disk again until `flush`. A missing file opens as an empty store.
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    values: HashMap<String, i64>,
}

impl JsonScoreStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn get(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }
}
