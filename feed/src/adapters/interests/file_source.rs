//! File-backed interest source
//!
//! Reads `interests.txt`: one topic per line, blank lines ignored.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::InterestList;
use crate::domain::ports::InterestSource;
use crate::error::InterestError;

pub const INTERESTS_FILE: &str = "interests.txt";

pub struct FileInterestSource {
    path: PathBuf,
}

impl FileInterestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `interests.txt` inside `base`
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        Self::new(base.as_ref().join(INTERESTS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InterestSource for FileInterestSource {
    fn load(&self) -> Result<Option<InterestList>, InterestError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let list = InterestList::parse(&contents);
                tracing::debug!(
                    path = %self.path.display(),
                    topics = list.len(),
                    "Loaded interests"
                );
                Ok(Some(list))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InterestError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
