//! Per-level best-attempt records
//!
//! One small file per level under the records directory,
//! `min_attempts<N>.txt`, holding a single integer: the fewest attempts
//! (deaths plus one) in which the level has ever been completed. A
//! missing or empty file means no record yet.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Record store rooted at a directory
#[derive(Debug, Clone)]
pub struct Records {
    dir: PathBuf,
}

/// Why a record read or write failed
#[derive(Debug)]
pub enum RecordsError {
    Io { path: PathBuf, source: io::Error },
    /// The record file exists but is not a bare integer
    Corrupt { path: PathBuf, contents: String },
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordsError::Io { path, source } => {
                write!(f, "record file {}: {}", path.display(), source)
            }
            RecordsError::Corrupt { path, contents } => {
                write!(
                    f,
                    "record file {} holds {:?}, expected an integer",
                    path.display(),
                    contents
                )
            }
        }
    }
}

impl std::error::Error for RecordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordsError::Io { source, .. } => Some(source),
            RecordsError::Corrupt { .. } => None,
        }
    }
}

impl Records {
    /// Point the store at a directory; no I/O happens until a query
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, level: u32) -> PathBuf {
        self.dir.join(format!("min_attempts{}.txt", level))
    }

    /// Best recorded attempt count for a level, if any
    pub fn best(&self, level: u32) -> Result<Option<u32>, RecordsError> {
        let path = self.path_for(level);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(RecordsError::Io { path, source }),
        };

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<u32>() {
            Ok(best) => Ok(Some(best)),
            Err(_) => Err(RecordsError::Corrupt {
                path,
                contents: trimmed.to_string(),
            }),
        }
    }

    /// Submit a completed run.
    ///
    /// The standing record is beaten when the run's death count is below
    /// it; `deaths + 1` is then stored and returned. `None` means the old
    /// record stands. A run matching the record's attempt count rewrites
    /// the same number, which mirrors the comparison being against the
    /// stored attempts rather than stored deaths.
    pub fn submit(&self, level: u32, deaths: u32) -> Result<Option<u32>, RecordsError> {
        if let Some(best) = self.best(level)? {
            if deaths >= best {
                return Ok(None);
            }
        }

        let attempts = deaths + 1;
        let path = self.path_for(level);
        fs::create_dir_all(&self.dir).map_err(|source| RecordsError::Io {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, attempts.to_string()).map_err(|source| RecordsError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("new record for level {}: {} attempts", level, attempts);
        Ok(Some(attempts))
    }
}
