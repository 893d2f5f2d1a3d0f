//! Batch extraction entry point for the CLI.

use std::io::{self, Write};
use std::process::ExitCode;

use ytcomments::export::resolve_font_path;
use ytcomments::{
    CommentFetcher, DirectoryArtifactSink, DocumentFont, Exporter, ExtractError, ExtractorConfig,
    HttpCommentThreadGateway, process_batch,
};

use super::output;

/// Fetches and exports comments for every configured video.
///
/// Returns [`ExitCode::FAILURE`] when required input is missing or any
/// video failed; the remaining videos are still processed.
///
/// # Errors
///
/// Returns an error when configuration is unusable, the PDF font cannot be
/// loaded, or stdout cannot be written.
pub fn run(config: &ExtractorConfig) -> Result<ExitCode, ExtractError> {
    let mut stdout = io::stdout().lock();
    output::write_banner(&mut stdout)?;

    if !config.has_required_inputs() {
        tracing::warn!("API key or video IDs missing; nothing to fetch");
        output::write_missing_input(&mut stdout)?;
        return Ok(ExitCode::FAILURE);
    }

    let api_key = config.resolve_api_key()?;
    let video_ids = config.require_video_ids()?;
    let settings = config.gateway_settings()?;
    let style = config.document_style()?;

    let font_path = resolve_font_path(config.font_path().as_deref())?;
    let exporter = Exporter::new(DocumentFont::load(&font_path)?, style);

    let gateway = HttpCommentThreadGateway::new(api_key, &settings)?;
    let fetcher = CommentFetcher::new(&gateway);
    let mut sink = DirectoryArtifactSink::new(config.output_dir().to_path_buf());

    let mut write_failure = None;
    let report = process_batch(&video_ids, &fetcher, &exporter, &mut sink, |video| {
        if write_failure.is_none() {
            write_failure = output::write_video_report(&mut stdout, video).err();
        }
    });
    if let Some(error) = write_failure {
        return Err(error);
    }

    output::write_batch_summary(&mut stdout, &report)?;
    stdout.flush().map_err(|error| output::io_error(&error))?;

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
