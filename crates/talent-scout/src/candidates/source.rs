use std::fs;
use std::path::{Path, PathBuf};

use super::domain::Candidate;

/// Source abstraction so the directory can be exercised in isolation.
pub trait CandidateSource: Send + Sync {
    fn load(&self) -> Result<Vec<Candidate>, SourceError>;
}

/// Error enumeration for candidate source failures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read candidate data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse candidate data from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of candidate records from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Candidate>, SourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixed in-memory roster, used by tests and the built-in demo data.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    candidates: Vec<Candidate>,
}

impl StaticSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl CandidateSource for StaticSource {
    fn load(&self) -> Result<Vec<Candidate>, SourceError> {
        Ok(self.candidates.clone())
    }
}
