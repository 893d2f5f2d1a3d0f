//! Destinations that receive rendered artifacts.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::export::ExportArtifact;
use crate::youtube::ExtractError;

/// Receives artifacts once they are ready for retrieval.
pub trait ArtifactSink {
    /// Store or offer `artifact`, returning where it can be retrieved.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Io`] when the artifact cannot be stored.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<Utf8PathBuf, ExtractError>;
}

/// Writes artifacts as files into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryArtifactSink {
    root: Utf8PathBuf,
}

impl DirectoryArtifactSink {
    /// Creates a sink rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn open_root(&self) -> Result<Dir, ExtractError> {
        Dir::create_ambient_dir_all(&self.root, ambient_authority()).map_err(|error| {
            ExtractError::Io {
                message: format!("failed to create output directory '{}': {error}", self.root),
            }
        })?;
        Dir::open_ambient_dir(&self.root, ambient_authority()).map_err(|error| ExtractError::Io {
            message: format!("failed to open output directory '{}': {error}", self.root),
        })
    }
}

impl ArtifactSink for DirectoryArtifactSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<Utf8PathBuf, ExtractError> {
        let dir = self.open_root()?;
        dir.write(artifact.file_name(), artifact.bytes())
            .map_err(|error| ExtractError::Io {
                message: format!(
                    "failed to write '{}' to '{}': {error}",
                    artifact.file_name(),
                    self.root
                ),
            })?;

        let location = self.root.join(artifact.file_name());
        tracing::info!(
            path = %location,
            mime_type = artifact.mime_type(),
            bytes = artifact.bytes().len(),
            "wrote artifact"
        );
        Ok(location)
    }
}

/// Keeps artifacts in memory; used where no filesystem should be touched.
#[derive(Debug, Default, Clone)]
pub struct MemoryArtifactSink {
    artifacts: Vec<ExportArtifact>,
}

impl MemoryArtifactSink {
    /// Artifacts delivered so far, in delivery order.
    #[must_use]
    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.artifacts
    }

    /// Finds a delivered artifact by file name.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&ExportArtifact> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.file_name() == file_name)
    }
}

impl ArtifactSink for MemoryArtifactSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<Utf8PathBuf, ExtractError> {
        self.artifacts.push(artifact.clone());
        Ok(Utf8PathBuf::from(artifact.file_name()))
    }
}
