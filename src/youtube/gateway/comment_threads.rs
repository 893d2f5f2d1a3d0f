//! Blocking HTTP implementation of [`CommentThreadGateway`].

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::youtube::error::ExtractError;
use crate::youtube::locator::ApiKey;
use crate::youtube::models::ApiCommentThreadList;
use crate::youtube::pagination::{CommentPage, PageRequest};

use super::CommentThreadGateway;
use super::client::{build_http_client, comment_threads_endpoint};
use super::error_mapping::{map_http_error, map_transport_error};

/// Public YouTube Data API v3 root.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const OPERATION: &str = "comment threads";

/// Connection settings for [`HttpCommentThreadGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    /// API root the `commentThreads` resource is appended to.
    pub api_base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewaySettings {
    /// Constructs settings for a specific API root and timeout.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            timeout,
        }
    }
}

/// Gateway that lists comment threads over HTTPS with an API key.
#[derive(Debug, Clone)]
pub struct HttpCommentThreadGateway {
    client: Client,
    endpoint: Url,
    api_key: ApiKey,
}

impl HttpCommentThreadGateway {
    /// Creates a gateway bound to `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidUrl`] when the API base is unusable or
    /// [`ExtractError::Configuration`] when the HTTP client cannot be built.
    pub fn new(api_key: ApiKey, settings: &GatewaySettings) -> Result<Self, ExtractError> {
        let endpoint = comment_threads_endpoint(&settings.api_base_url)?;
        let client = build_http_client(settings.timeout)?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("part", "snippet")
                .append_pair("videoId", request.video_id().as_str())
                .append_pair("maxResults", &request.max_results().to_string());
            if let Some(token) = request.page_token() {
                query.append_pair("pageToken", token);
            }
            query.append_pair("key", self.api_key.as_ref());
        }
        url
    }
}

impl CommentThreadGateway for HttpCommentThreadGateway {
    fn comment_thread_page(&self, request: &PageRequest) -> Result<CommentPage, ExtractError> {
        tracing::debug!(
            video_id = %request.video_id(),
            page = request.page_number(),
            "requesting comment thread page"
        );

        let response = self
            .client
            .get(self.page_url(request))
            .send()
            .map_err(|error| map_transport_error(OPERATION, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(map_http_error(
                OPERATION,
                request.video_id().as_str(),
                status,
                &body,
            ));
        }

        let list: ApiCommentThreadList = response
            .json()
            .map_err(|error| map_transport_error(OPERATION, error))?;
        Ok(list.into())
    }
}
