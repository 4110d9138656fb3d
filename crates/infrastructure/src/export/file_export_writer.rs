use rkn_roulette_domain::{DomainError, ExportArtifact};
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::atomic_file::write_atomic;

/// Saves export artifacts into a directory under their own file name.
pub struct FileExportWriter {
    dir: PathBuf,
}

impl FileExportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Overwrites an earlier export from the same day.
    #[instrument(skip(self, artifact), fields(file_name = %artifact.file_name))]
    pub fn write(&self, artifact: &ExportArtifact) -> Result<PathBuf, DomainError> {
        if artifact.file_name.contains(['/', '\\']) {
            return Err(DomainError::ExportFailed(format!(
                "invalid export file name '{}'",
                artifact.file_name
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|e| DomainError::ExportFailed(e.to_string()))?;

        let path = self.dir.join(&artifact.file_name);
        write_atomic(&path, &artifact.contents)
            .map_err(|e| DomainError::ExportFailed(e.to_string()))?;

        info!(path = %path.display(), bytes = artifact.contents.len(), "Export written");
        Ok(path)
    }
}
