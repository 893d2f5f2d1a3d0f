//! Gateways for loading comment thread pages from the YouTube Data API.
//!
//! The trait-based design enables mocking in tests while
//! [`HttpCommentThreadGateway`] issues real blocking HTTP requests.

mod client;
mod comment_threads;
mod error_mapping;

pub use comment_threads::{DEFAULT_API_BASE_URL, GatewaySettings, HttpCommentThreadGateway};

use crate::youtube::error::ExtractError;
use crate::youtube::pagination::{CommentPage, PageRequest};

/// Gateway that can load one page of top-level comment threads.
#[cfg_attr(test, mockall::automock)]
pub trait CommentThreadGateway {
    /// Fetch the page described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when the request cannot be sent, the key is
    /// rejected, or the response cannot be decoded.
    fn comment_thread_page(&self, request: &PageRequest) -> Result<CommentPage, ExtractError>;
}
