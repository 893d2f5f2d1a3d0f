//! Sequential processing of a batch of video identifiers.
//!
//! Each identifier is validated, fetched, exported, and delivered before the
//! next one starts. A failure, including a malformed identifier, is recorded
//! against its entry and the batch moves on; the caller decides how to
//! surface failures from the final [`BatchReport`].

mod sink;

pub use sink::{ArtifactSink, DirectoryArtifactSink, MemoryArtifactSink};

use camino::Utf8PathBuf;

use crate::export::{CollectionExporter, ExportArtifact};
use crate::youtube::{CommentFetcher, CommentThreadGateway, ExtractError, VideoId};

/// An artifact that reached its sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredArtifact {
    /// File name offered for download.
    pub file_name: String,
    /// MIME type of the file.
    pub mime_type: &'static str,
    /// Where the sink put the file.
    pub location: Utf8PathBuf,
}

/// What happened to one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoOutcome {
    /// Comments were fetched and every artifact was delivered.
    Exported {
        /// Number of comments in each artifact.
        comment_count: usize,
        /// Delivered artifacts, CSV first.
        artifacts: Vec<DeliveredArtifact>,
    },
    /// The video has no top-level comments; nothing was produced.
    NoComments,
    /// The identifier was malformed, or fetching, exporting, or delivering
    /// failed.
    Failed(ExtractError),
}

/// Outcome for one identifier in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReport {
    /// Identifier as submitted, trimmed.
    pub video_id: String,
    /// What happened to it.
    pub outcome: VideoOutcome,
}

/// Outcomes for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    videos: Vec<VideoReport>,
}

impl BatchReport {
    /// Per-identifier reports in submission order.
    #[must_use]
    pub fn videos(&self) -> &[VideoReport] {
        &self.videos
    }

    /// Whether any identifier failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.videos
            .iter()
            .any(|report| matches!(report.outcome, VideoOutcome::Failed(_)))
    }

    /// Number of identifiers whose artifacts were delivered.
    #[must_use]
    pub fn exported_count(&self) -> usize {
        self.videos
            .iter()
            .filter(|report| matches!(report.outcome, VideoOutcome::Exported { .. }))
            .count()
    }
}

/// Processes `entries` in order, recording one outcome per entry.
///
/// Each entry is validated with [`VideoId::new`] just before it is fetched.
/// `on_outcome` is called as soon as each entry finishes so callers can
/// report progress before the batch completes.
pub fn process_batch<G, E, S, F>(
    entries: &[String],
    fetcher: &CommentFetcher<'_, G>,
    exporter: &E,
    sink: &mut S,
    mut on_outcome: F,
) -> BatchReport
where
    G: CommentThreadGateway,
    E: CollectionExporter,
    S: ArtifactSink,
    F: FnMut(&VideoReport),
{
    let mut report = BatchReport::default();
    for entry in entries {
        let video_id = entry.trim();
        let outcome = VideoId::new(video_id).map_or_else(VideoOutcome::Failed, |id| {
            process_video(&id, fetcher, exporter, sink)
        });
        if let VideoOutcome::Failed(error) = &outcome {
            tracing::warn!(video_id, error = %error, "video failed");
        }
        let video_report = VideoReport {
            video_id: video_id.to_owned(),
            outcome,
        };
        on_outcome(&video_report);
        report.videos.push(video_report);
    }

    tracing::info!(
        submitted = entries.len(),
        exported = report.exported_count(),
        failed = report.has_failures(),
        "batch finished"
    );
    report
}

fn process_video<G, E, S>(
    video_id: &VideoId,
    fetcher: &CommentFetcher<'_, G>,
    exporter: &E,
    sink: &mut S,
) -> VideoOutcome
where
    G: CommentThreadGateway,
    E: CollectionExporter,
    S: ArtifactSink,
{
    let collection = match fetcher.fetch(video_id) {
        Ok(collection) => collection,
        Err(error) => return VideoOutcome::Failed(error),
    };
    if collection.is_empty() {
        tracing::info!(video_id = %video_id, "no comments found");
        return VideoOutcome::NoComments;
    }

    // Render everything before delivering anything so a video never ends up
    // with only one of its files.
    let artifacts = match exporter.export(&collection) {
        Ok(artifacts) => artifacts,
        Err(error) => return VideoOutcome::Failed(error),
    };

    match deliver_all(&artifacts, sink) {
        Ok(delivered) => VideoOutcome::Exported {
            comment_count: collection.len(),
            artifacts: delivered,
        },
        Err(error) => VideoOutcome::Failed(error),
    }
}

fn deliver_all<S: ArtifactSink>(
    artifacts: &[ExportArtifact],
    sink: &mut S,
) -> Result<Vec<DeliveredArtifact>, ExtractError> {
    artifacts
        .iter()
        .map(|artifact| {
            let location = sink.deliver(artifact)?;
            Ok(DeliveredArtifact {
                file_name: artifact.file_name().to_owned(),
                mime_type: artifact.mime_type(),
                location,
            })
        })
        .collect()
}
