use rkn_roulette_application::ports::SnapshotStore;
use rkn_roulette_domain::DomainError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, error, instrument};

use crate::atomic_file::write_atomic;

/// Key-value storage backed by one `<key>.json` file per key.
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn check_key(key: &str) -> Result<(), String> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(format!("invalid storage key '{}'", key));
        }
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    #[instrument(skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        Self::check_key(key).map_err(|reason| DomainError::SnapshotRead {
            slot: key.to_string(),
            reason,
        })?;

        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                debug!(path = %path.display(), bytes = raw.len(), "Snapshot read");
                Ok(Some(raw))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to read snapshot");
                Err(DomainError::SnapshotRead {
                    slot: key.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let to_error = |reason: String| DomainError::SnapshotWrite {
            slot: key.to_string(),
            reason,
        };

        Self::check_key(key).map_err(to_error)?;
        fs::create_dir_all(&self.dir).map_err(|e| to_error(e.to_string()))?;

        let path = self.path_for(key);
        write_atomic(&path, value.as_bytes()).map_err(|e| {
            error!(error = %e, path = %path.display(), "Failed to write snapshot");
            to_error(e.to_string())
        })?;

        debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}
