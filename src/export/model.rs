//! Export artifact models and file naming.

use std::fmt;

use crate::youtube::VideoId;

/// Prefix shared by every artifact file name.
const FILE_NAME_PREFIX: &str = "youtube_comments_";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single-column comma-separated table.
    Csv,
    /// Paginated, word-wrapped PDF document.
    Pdf,
}

impl ExportFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type offered alongside the artifact.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }

    /// Deterministic file name for `video_id` in this format.
    #[must_use]
    pub fn file_name(self, video_id: &VideoId) -> String {
        format!("{FILE_NAME_PREFIX}{video_id}.{}", self.extension())
    }
}

/// A rendered export ready to be handed to an artifact sink.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    format: ExportFormat,
    file_name: String,
    bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Wraps rendered bytes for `video_id`.
    #[must_use]
    pub fn new(format: ExportFormat, video_id: &VideoId, bytes: Vec<u8>) -> Self {
        Self {
            format,
            file_name: format.file_name(video_id),
            bytes,
        }
    }

    /// File name the artifact is offered under.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type of the artifact.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Rendered content.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for ExportArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportArtifact")
            .field("format", &self.format)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn video() -> VideoId {
        VideoId::new("abc123").expect("id should be valid")
    }

    #[rstest]
    #[case(ExportFormat::Csv, "youtube_comments_abc123.csv", "text/csv")]
    #[case(ExportFormat::Pdf, "youtube_comments_abc123.pdf", "application/pdf")]
    fn names_artifacts_from_the_video_id(
        #[case] format: ExportFormat,
        #[case] file_name: &str,
        #[case] mime_type: &str,
    ) {
        let artifact = ExportArtifact::new(format, &video(), vec![1, 2, 3]);

        assert_eq!(artifact.file_name(), file_name);
        assert_eq!(artifact.mime_type(), mime_type);
        assert_eq!(artifact.bytes(), &[1, 2, 3]);
    }

    #[rstest]
    fn debug_output_omits_content() {
        let artifact = ExportArtifact::new(ExportFormat::Csv, &video(), b"secret".to_vec());
        let rendered = format!("{artifact:?}");
        assert!(rendered.contains("len: 6"), "unexpected debug: {rendered}");
    }
}
