//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use ytcomments::{BatchReport, ExtractError, VideoOutcome, VideoReport};

const TITLE: &str = "YouTube Comment Extractor";
const ABOUT: &str = "Extracts the top-level comments of YouTube videos and saves each \
                     video's comments as a CSV table and a PDF document.";

/// Converts an I/O failure on the terminal into an [`ExtractError`].
#[must_use]
pub fn io_error(error: &io::Error) -> ExtractError {
    ExtractError::Io {
        message: error.to_string(),
    }
}

/// Writes the title and about text shown before any work starts.
pub fn write_banner<W: Write>(writer: &mut W) -> Result<(), ExtractError> {
    writeln!(writer, "{TITLE}").map_err(|e| io_error(&e))?;
    writeln!(writer, "{}", "=".repeat(TITLE.len())).map_err(|e| io_error(&e))?;
    writeln!(writer, "{ABOUT}").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the warning shown when the key or identifiers are missing.
pub fn write_missing_input<W: Write>(writer: &mut W) -> Result<(), ExtractError> {
    writeln!(
        writer,
        "Please enter both API Key and Video IDs (--api-key/-k or YOUTUBE_API_KEY, --video-ids/-v)."
    )
    .map_err(|e| io_error(&e))
}

/// Writes the status lines for one processed video.
pub fn write_video_report<W: Write>(
    writer: &mut W,
    report: &VideoReport,
) -> Result<(), ExtractError> {
    let video_id = &report.video_id;
    match &report.outcome {
        VideoOutcome::Exported {
            comment_count,
            artifacts,
        } => {
            writeln!(
                writer,
                "Comments fetched successfully for video ID: {video_id} ({comment_count} comments)"
            )
            .map_err(|e| io_error(&e))?;
            for artifact in artifacts {
                writeln!(writer, "  {} ({})", artifact.location, artifact.mime_type)
                    .map_err(|e| io_error(&e))?;
            }
            Ok(())
        }
        VideoOutcome::NoComments => {
            writeln!(writer, "No comments found for video ID: {video_id}")
                .map_err(|e| io_error(&e))
        }
        VideoOutcome::Failed(error) => {
            writeln!(writer, "Failed to fetch comments for video ID: {video_id}: {error}")
                .map_err(|e| io_error(&e))
        }
    }
}

/// Writes the closing count of exported videos.
pub fn write_batch_summary<W: Write>(
    writer: &mut W,
    report: &BatchReport,
) -> Result<(), ExtractError> {
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Exported {} of {} videos.",
        report.exported_count(),
        report.videos().len()
    )
    .map_err(|e| io_error(&e))
}
