//! File-backed comment store writing one JSON array per repository.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::{CacheError, CacheKey, CommentStore};
use crate::github::models::RawComment;

/// Stores each repository's comments as `<owner>.<repo>.json` in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileCommentStore {
    directory: Utf8PathBuf,
}

impl JsonFileCommentStore {
    /// Creates a store rooted at `directory`.
    ///
    /// The directory is created on the first save if it does not exist.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the cache files.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Full path of the cache file for `key`.
    #[must_use]
    pub fn path_for(&self, key: &CacheKey) -> Utf8PathBuf {
        self.directory.join(key.file_name())
    }

    fn read_error(&self, key: &CacheKey, message: String) -> CacheError {
        CacheError::Read {
            path: self.path_for(key).into_string(),
            message,
        }
    }

    fn write_error(&self, key: &CacheKey, message: String) -> CacheError {
        CacheError::Write {
            path: self.path_for(key).into_string(),
            message,
        }
    }
}

impl CommentStore for JsonFileCommentStore {
    fn load(&self, key: &CacheKey) -> Result<Vec<RawComment>, CacheError> {
        let not_found = || CacheError::NotFound {
            key: key.to_string(),
        };

        let dir = match Dir::open_ambient_dir(&self.directory, ambient_authority()) {
            Ok(dir) => dir,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(error) => return Err(self.read_error(key, error.to_string())),
        };

        let content = match dir.read_to_string(key.file_name()) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(error) => return Err(self.read_error(key, error.to_string())),
        };

        serde_json::from_str(&content).map_err(|error| self.read_error(key, error.to_string()))
    }

    fn save(&self, key: &CacheKey, comments: &[RawComment]) -> Result<(), CacheError> {
        Dir::create_ambient_dir_all(&self.directory, ambient_authority())
            .map_err(|error| self.write_error(key, error.to_string()))?;
        let dir = Dir::open_ambient_dir(&self.directory, ambient_authority())
            .map_err(|error| self.write_error(key, error.to_string()))?;

        let json = serde_json::to_string(comments)
            .map_err(|error| self.write_error(key, error.to_string()))?;

        dir.write(key.file_name(), json)
            .map_err(|error| self.write_error(key, error.to_string()))
    }
}
