//! Font resolution and loading for PDF rendering.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use genpdf::fonts::{FontData, FontFamily};
use printpdf::BuiltinFont;

use crate::youtube::ExtractError;

/// TrueType files tried, in order, when no font path is configured.
#[cfg(not(windows))]
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
];

#[cfg(windows)]
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\ARIALUNI.TTF",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Returns the first well-known system font that exists on this machine.
#[must_use]
pub fn discover_system_font() -> Option<Utf8PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(Utf8Path::new)
        .find(|candidate| candidate.is_file())
        .map(Utf8Path::to_path_buf)
}

/// Picks the configured font, or a discovered system font when unset.
///
/// # Errors
///
/// Returns [`ExtractError::FontUnavailable`] when nothing is configured and
/// no system font is found.
pub fn resolve_font_path(configured: Option<&Utf8Path>) -> Result<Utf8PathBuf, ExtractError> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    discover_system_font().ok_or_else(|| ExtractError::FontUnavailable {
        message: format!(
            "no font configured (use --font-path) and none found among {} system locations",
            SYSTEM_FONT_CANDIDATES.len()
        ),
    })
}

/// A parsed TrueType font ready for document rendering.
///
/// Comments are only ever set in the regular style, so only that face is
/// embedded. The other styles reuse its metrics but map onto a built-in PDF
/// font, which keeps a single copy of the font file in each document.
#[derive(Clone)]
pub struct DocumentFont {
    path: Utf8PathBuf,
    regular: FontData,
    unused_style: FontData,
}

impl DocumentFont {
    /// Reads and parses the font at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::FontUnavailable`] when the file cannot be read
    /// or is not a usable TrueType font.
    pub fn load(path: &Utf8Path) -> Result<Self, ExtractError> {
        let bytes = read_font_file(path)?;
        let parse_failure = |error: genpdf::error::Error| ExtractError::FontUnavailable {
            message: format!("failed to parse font '{path}': {error}"),
        };
        let regular = FontData::new(bytes.clone(), None).map_err(parse_failure)?;
        let unused_style =
            FontData::new(bytes, Some(BuiltinFont::Helvetica)).map_err(parse_failure)?;
        tracing::debug!(font = %path, "loaded document font");
        Ok(Self {
            path: path.to_path_buf(),
            regular,
            unused_style,
        })
    }

    pub(super) fn family(&self) -> FontFamily<FontData> {
        FontFamily {
            regular: self.regular.clone(),
            bold: self.unused_style.clone(),
            italic: self.unused_style.clone(),
            bold_italic: self.unused_style.clone(),
        }
    }
}

impl std::fmt::Debug for DocumentFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentFont")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn read_font_file(path: &Utf8Path) -> Result<Vec<u8>, ExtractError> {
    let unavailable = |detail: String| ExtractError::FontUnavailable {
        message: format!("cannot read font '{path}': {detail}"),
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| unavailable("path has no file name".to_owned()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| unavailable(error.to_string()))?;
    dir.read(file_name)
        .map_err(|error| unavailable(error.to_string()))
}
