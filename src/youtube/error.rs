//! Error types exposed by the comment extraction layer.

use thiserror::Error;

/// Errors surfaced while reading input, talking to YouTube, or exporting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// No API key was supplied.
    #[error("YouTube API key is required (use --api-key or YOUTUBE_API_KEY)")]
    MissingApiKey,

    /// No video identifiers were supplied.
    #[error("at least one video ID is required (use --video-ids)")]
    MissingVideoIds,

    /// A video identifier could not be used in a request.
    #[error("video ID '{value}' is invalid: {reason}")]
    InvalidVideoId {
        /// The rejected identifier as supplied.
        value: String,
        /// Why the identifier was rejected.
        reason: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The API key was rejected by YouTube.
    #[error("YouTube rejected the API key: {message}")]
    Authentication {
        /// Error message returned with the rejection.
        message: String,
    },

    /// The video has comments turned off.
    #[error("comments are disabled for video {video_id}")]
    CommentsDisabled {
        /// Identifier of the video whose comments are disabled.
        video_id: String,
    },

    /// YouTube returned a non-authentication API error.
    #[error("YouTube API error: {message}")]
    Api {
        /// Status and message describing the failure.
        message: String,
    },

    /// Networking failed while calling YouTube.
    #[error("network error talking to YouTube: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// No usable font could be loaded for PDF rendering.
    #[error("font unavailable: {message}")]
    FontUnavailable {
        /// Which font was tried and why it failed.
        message: String,
    },

    /// The PDF renderer failed.
    #[error("document rendering failed: {message}")]
    Document {
        /// Renderer error detail.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ExtractError;

    #[rstest]
    fn missing_api_key_mentions_fallback_variable() {
        let message = ExtractError::MissingApiKey.to_string();
        assert!(
            message.contains("YOUTUBE_API_KEY"),
            "expected env var hint, got: {message}"
        );
    }
}
