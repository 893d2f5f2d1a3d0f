//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.ytcomments.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `YTCOMMENTS_API_KEY`,
//!    `YTCOMMENTS_VIDEO_IDS`, and friends, plus the conventional
//!    `YOUTUBE_API_KEY`
//! 4. **Command-line arguments** – `--api-key`/`-k`, `--video-ids`/`-v`, …
//!
//! # Configuration File
//!
//! ```toml
//! api_key = "AIza-example"
//! video_ids = "dQw4w9WgXcQ, 9bZkp7q19f0"
//! output_dir = "exports"
//! font_path = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
//! font_size = 11
//! ```

use std::env;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::DocumentStyle;
use crate::youtube::{
    ApiKey, DEFAULT_API_BASE_URL, ExtractError, GatewaySettings, split_video_ids,
};

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";

const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_FONT_SIZE: u8 = 12;
const DEFAULT_PAGE_MARGIN_MM: u8 = 10;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use ytcomments::ExtractorConfig;
///
/// let config = ExtractorConfig::load().expect("failed to load configuration");
/// let key = config.resolve_api_key().expect("API key required");
/// let videos = config.require_video_ids().expect("video IDs required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "YTCOMMENTS",
    discovery(
        dotfile_name = ".ytcomments.toml",
        config_file_name = "ytcomments.toml",
        app_name = "ytcomments"
    )
)]
pub struct ExtractorConfig {
    /// YouTube Data API v3 key.
    ///
    /// Can be provided via:
    /// - CLI: `--api-key <KEY>` or `-k <KEY>`
    /// - Environment: `YTCOMMENTS_API_KEY` or `YOUTUBE_API_KEY`
    /// - Config file: `api_key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub api_key: Option<String>,

    /// Comma-separated video identifiers to export.
    ///
    /// Can be provided via:
    /// - CLI: `--video-ids <IDS>` or `-v <IDS>`
    /// - Environment: `YTCOMMENTS_VIDEO_IDS`
    /// - Config file: `video_ids = "..."`
    #[ortho_config(cli_short = 'v')]
    pub video_ids: Option<String>,

    /// Directory the CSV and PDF files are written to.
    #[ortho_config(cli_short = 'o')]
    pub output_dir: String,

    /// TrueType font used for the PDF export.
    ///
    /// When unset, a handful of common system font locations are searched.
    #[ortho_config(cli_short = 'f')]
    pub font_path: Option<String>,

    /// Root of the YouTube Data API.
    #[ortho_config()]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// PDF font size in points.
    #[ortho_config()]
    pub font_size: u8,

    /// PDF page margin in millimetres.
    #[ortho_config()]
    pub page_margin_mm: u8,

    /// Log filter directive, for example `debug` or `ytcomments=trace`.
    ///
    /// Overrides `RUST_LOG` when set.
    #[ortho_config()]
    pub log_level: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            video_ids: None,
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
            font_path: None,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            font_size: DEFAULT_FONT_SIZE,
            page_margin_mm: DEFAULT_PAGE_MARGIN_MM,
            log_level: None,
        }
    }
}

impl ExtractorConfig {
    /// Resolves the API key from configuration or the `YOUTUBE_API_KEY`
    /// environment variable.
    ///
    /// A blank configured key counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingApiKey`] when no source provides a
    /// non-blank value.
    pub fn resolve_api_key(&self) -> Result<ApiKey, ExtractError> {
        let configured = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .map(ToOwned::to_owned);
        let value = configured
            .or_else(|| env::var(API_KEY_ENV_VAR).ok())
            .ok_or(ExtractError::MissingApiKey)?;
        ApiKey::new(value)
    }

    /// Splits the configured identifier list into batch entries.
    ///
    /// Entries are validated one at a time by the batch, so a malformed
    /// entry does not stop the others.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingVideoIds`] when no entry is configured.
    pub fn require_video_ids(&self) -> Result<Vec<String>, ExtractError> {
        split_video_ids(self.video_ids.as_deref().unwrap_or_default())
    }

    /// Whether both required inputs were supplied in some form.
    #[must_use]
    pub fn has_required_inputs(&self) -> bool {
        self.resolve_api_key().is_ok()
            && self
                .video_ids
                .as_deref()
                .is_some_and(|ids| ids.split(',').any(|id| !id.trim().is_empty()))
    }

    /// Output directory for exported files.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.output_dir)
    }

    /// Configured font location, if any.
    #[must_use]
    pub fn font_path(&self) -> Option<Utf8PathBuf> {
        self.font_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(Utf8PathBuf::from)
    }

    /// Connection settings for the HTTP gateway.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Configuration`] when the timeout is zero.
    pub fn gateway_settings(&self) -> Result<GatewaySettings, ExtractError> {
        if self.request_timeout_seconds == 0 {
            return Err(ExtractError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }
        Ok(GatewaySettings::new(
            self.api_base_url.clone(),
            Duration::from_secs(self.request_timeout_seconds),
        ))
    }

    /// Page and text settings for the PDF export.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Configuration`] when the font size is zero.
    pub fn document_style(&self) -> Result<DocumentStyle, ExtractError> {
        if self.font_size == 0 {
            return Err(ExtractError::Configuration {
                message: "font_size must be greater than zero".to_owned(),
            });
        }
        Ok(DocumentStyle {
            font_size: self.font_size,
            margin_mm: self.page_margin_mm,
        })
    }
}

#[cfg(test)]
mod tests;
