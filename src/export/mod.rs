//! Comment export to downloadable files.
//!
//! This module turns an ordered comment collection into the two artifacts
//! offered per video.
//!
//! # Supported Formats
//!
//! - **CSV**: single `Comment` column, one row per comment
//! - **PDF**: word-wrapped comment blocks flowing across pages
//!
//! Both formats keep the collection's order and drop nothing; they are pure
//! functions of their input apart from metadata the PDF library embeds.

mod model;
pub mod pdf;
mod table;

pub use model::{ExportArtifact, ExportFormat};
pub use pdf::{
    DocumentFont, DocumentStyle, discover_system_font, resolve_font_path, to_document, write_pdf,
};
pub use table::{CSV_HEADER, to_table, write_csv};

use crate::youtube::{CommentCollection, ExtractError};

/// Renders both artifacts for a collection with a shared font and style.
#[derive(Debug, Clone)]
pub struct Exporter {
    font: DocumentFont,
    style: DocumentStyle,
}

impl Exporter {
    /// Creates an exporter that renders documents with `font` and `style`.
    #[must_use]
    pub const fn new(font: DocumentFont, style: DocumentStyle) -> Self {
        Self { font, style }
    }

    /// Renders the CSV artifact for `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Io`] if CSV serialization fails.
    pub fn table(&self, collection: &CommentCollection) -> Result<ExportArtifact, ExtractError> {
        let bytes = to_table(collection.comments())?;
        Ok(ExportArtifact::new(
            ExportFormat::Csv,
            collection.video_id(),
            bytes,
        ))
    }

    /// Renders the PDF artifact for `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Document`] if rendering fails.
    pub fn document(&self, collection: &CommentCollection) -> Result<ExportArtifact, ExtractError> {
        let bytes = to_document(collection.comments(), &self.font, self.style)?;
        Ok(ExportArtifact::new(
            ExportFormat::Pdf,
            collection.video_id(),
            bytes,
        ))
    }
}

/// Produces every artifact offered for one collection.
pub trait CollectionExporter {
    /// Render all artifacts for `collection`, or none if any render fails.
    ///
    /// # Errors
    ///
    /// Returns the first rendering failure.
    fn export(&self, collection: &CommentCollection) -> Result<Vec<ExportArtifact>, ExtractError>;
}

impl CollectionExporter for Exporter {
    fn export(&self, collection: &CommentCollection) -> Result<Vec<ExportArtifact>, ExtractError> {
        Ok(vec![self.table(collection)?, self.document(collection)?])
    }
}
