//! PDF formatter for fetched comments.
//!
//! Each comment becomes a vertically stacked, word-wrapped block spanning
//! the text width of an A4 page. Blocks flow onto new pages when a page
//! fills up. Layout is delegated to `genpdf`; see [`layout`] for the text
//! preparation done beforehand, which measures words with the document font.

mod font;
pub mod layout;

pub use font::{DocumentFont, discover_system_font, resolve_font_path};

use std::io::Write;

use genpdf::elements::{Break, LinearLayout, Paragraph};
use genpdf::{Document, Mm, PaperSize, SimplePageDecorator};

use crate::youtube::ExtractError;

use self::layout::{BlockLine, comment_block};

const DEFAULT_FONT_SIZE: u8 = 12;
const DEFAULT_MARGIN_MM: u8 = 10;
const DOCUMENT_TITLE: &str = "YouTube comments";
const PAGE_WIDTH_MM: i32 = 210;
/// Kept free on every line so rounding in the renderer never pushes a
/// measured word past the edge.
const LINE_SLACK_MM: i32 = 1;

/// Page and text settings for the PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStyle {
    /// Font size in points.
    pub font_size: u8,
    /// Margin on every page edge, in millimetres.
    pub margin_mm: u8,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

/// Writes comments as a PDF document to the given writer.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] if the margins leave no room for text,
/// if a character is wider than the text area, or if the renderer fails,
/// which includes failures to write to `writer`.
pub fn write_pdf<W: Write>(
    writer: W,
    comments: &[String],
    font: &DocumentFont,
    style: DocumentStyle,
) -> Result<(), ExtractError> {
    let mut document = Document::new(font.family());
    document.set_title(DOCUMENT_TITLE);
    document.set_paper_size(PaperSize::A4);
    document.set_font_size(style.font_size);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(i32::from(style.margin_mm));
    document.set_page_decorator(decorator);

    let line_width = text_width(style)?;
    let blocks = {
        let cache = document.font_cache();
        let regular = cache.default_font_family().regular;
        // Words reach the wrapper with their trailing space attached.
        let fits = |word: &str| {
            regular.str_width(cache, &format!("{word} "), style.font_size) <= line_width
        };
        comments
            .iter()
            .map(|comment| comment_element(comment, &fits))
            .collect::<Result<Vec<_>, _>>()?
    };
    for block in blocks {
        document.push(block);
    }

    document
        .render(writer)
        .map_err(|error| ExtractError::Document {
            message: error.to_string(),
        })
}

/// Renders comments into an in-memory PDF file.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] if the renderer fails.
pub fn to_document(
    comments: &[String],
    font: &DocumentFont,
    style: DocumentStyle,
) -> Result<Vec<u8>, ExtractError> {
    let mut buffer = Vec::new();
    write_pdf(&mut buffer, comments, font, style)?;
    Ok(buffer)
}

fn text_width(style: DocumentStyle) -> Result<Mm, ExtractError> {
    let width = PAGE_WIDTH_MM - 2 * i32::from(style.margin_mm) - LINE_SLACK_MM;
    if width <= 0 {
        return Err(ExtractError::Document {
            message: format!("a {} mm margin leaves no room for text", style.margin_mm),
        });
    }
    Ok(Mm::from(width))
}

fn comment_element<F>(comment: &str, fits: &F) -> Result<LinearLayout, ExtractError>
where
    F: Fn(&str) -> bool,
{
    let mut block = LinearLayout::vertical();
    for line in comment_block(comment, fits)? {
        match line {
            BlockLine::Text(text) => block.push(Paragraph::new(text)),
            BlockLine::Blank => block.push(Break::new(1)),
        }
    }
    Ok(block)
}
