//! HTTP client construction helpers for gateway implementations.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::youtube::error::ExtractError;

/// Builds a blocking HTTP client with the given request timeout.
///
/// TLS verification stays at reqwest's defaults.
///
/// # Errors
///
/// Returns [`ExtractError::Configuration`] when the client cannot be built.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, ExtractError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| ExtractError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}

/// Parses the API base URL and appends the `commentThreads` resource.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidUrl`] when the base cannot be parsed or
/// cannot carry a path.
pub(super) fn comment_threads_endpoint(api_base: &str) -> Result<Url, ExtractError> {
    let mut endpoint =
        Url::parse(api_base).map_err(|error| ExtractError::InvalidUrl(error.to_string()))?;

    endpoint
        .path_segments_mut()
        .map_err(|()| ExtractError::InvalidUrl(format!("{api_base} cannot be a base URL")))?
        .pop_if_empty()
        .push("commentThreads");

    Ok(endpoint)
}
