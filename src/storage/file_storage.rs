use super::KeyValueStorage;
use crate::error::StorageError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                trace!(path = ?path, bytes = contents.len(), "read storage key");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { key: key.to_string(), source: e }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e| StorageError::Write { key: key.to_string(), source: e };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write beside the target and rename over it so readers never see
        // a half-written file.
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{}.json.tmp", key));
        {
            let mut file = fs::File::create(&staging).map_err(write_err)?;
            file.write_all(value.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }
        fs::rename(&staging, &target).map_err(write_err)?;

        debug!(path = ?target, bytes = value.len(), "wrote storage key");
        Ok(())
    }
}
