//! Identity wrappers for the API key and video identifiers.

use std::fmt;

use super::error::ExtractError;

/// YouTube Data API key wrapper enforcing presence.
///
/// The key travels as a query parameter, so its `Debug` output is redacted
/// to keep it out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates that the key is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::MissingApiKey` when the supplied string is blank.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ExtractError> {
        let trimmed = key.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExtractError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Opaque YouTube video identifier.
///
/// Format is deliberately not checked against YouTube's 11-character shape;
/// only values that cannot be sent as a single query value or used in a file
/// name are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Trims and validates a single identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidVideoId`] when the value is blank or
    /// contains whitespace or path separators.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ExtractError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid(raw, "identifier is empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid(raw, "identifier contains whitespace"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(invalid(raw, "identifier contains a path separator"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(value: &str, reason: &str) -> ExtractError {
    ExtractError::InvalidVideoId {
        value: value.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Splits a comma-separated identifier list into trimmed, non-blank entries.
///
/// Entries are not validated here. Each one is checked with
/// [`VideoId::new`] when its turn in the batch comes, so a malformed entry
/// only fails itself.
///
/// # Errors
///
/// Returns [`ExtractError::MissingVideoIds`] when no entry remains after
/// splitting.
pub fn split_video_ids(input: &str) -> Result<Vec<String>, ExtractError> {
    let entries: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if entries.is_empty() {
        return Err(ExtractError::MissingVideoIds);
    }
    Ok(entries)
}
