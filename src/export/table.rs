//! CSV formatter for fetched comments.
//!
//! Produces a single `Comment` column with one record per comment. Fields are
//! quoted only when they contain a delimiter, quote, or line break.

use std::io::Write;

use crate::youtube::ExtractError;

/// Column label written as the only header field.
pub const CSV_HEADER: &str = "Comment";

/// Writes comments as CSV to the given writer.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if writing to the output fails.
pub fn write_csv<W: Write>(writer: W, comments: &[String]) -> Result<(), ExtractError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record([CSV_HEADER]).map_err(|e| csv_error(&e))?;
    for comment in comments {
        csv_writer.write_record([comment]).map_err(|e| csv_error(&e))?;
    }
    csv_writer.flush().map_err(|e| ExtractError::Io {
        message: format!("failed to flush CSV output: {e}"),
    })
}

/// Renders comments into an in-memory CSV file.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the CSV writer fails.
pub fn to_table(comments: &[String]) -> Result<Vec<u8>, ExtractError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, comments)?;
    Ok(buffer)
}

fn csv_error(error: &csv::Error) -> ExtractError {
    ExtractError::Io {
        message: format!("CSV serialization failed: {error}"),
    }
}
