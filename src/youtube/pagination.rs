//! Continuation-token pagination for comment thread listings.
//!
//! YouTube pages `commentThreads` results with an opaque `nextPageToken`.
//! [`PageRequest`] describes one page call and knows how to derive the
//! request for the following page.

use super::locator::VideoId;

/// Largest page size the `commentThreads` endpoint accepts.
pub const MAX_RESULTS_PER_PAGE: u8 = 100;

/// Parameters for a single `commentThreads` page call.
///
/// # Example
///
/// ```
/// use ytcomments::youtube::{PageRequest, VideoId};
///
/// let video = VideoId::new("abc123").expect("valid id");
/// let first = PageRequest::first(video);
/// assert_eq!(first.page_number(), 1);
/// assert!(first.page_token().is_none());
///
/// let second = first.next("CURSOR".to_owned());
/// assert_eq!(second.page_number(), 2);
/// assert_eq!(second.page_token(), Some("CURSOR"));
/// assert_eq!(second.max_results(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    video_id: VideoId,
    page_token: Option<String>,
    max_results: u8,
    page_number: u32,
}

impl PageRequest {
    /// Creates the request for the first page at the maximum page size.
    #[must_use]
    pub const fn first(video_id: VideoId) -> Self {
        Self {
            video_id,
            page_token: None,
            max_results: MAX_RESULTS_PER_PAGE,
            page_number: 1,
        }
    }

    /// Derives the request for the page identified by `token`, keeping the
    /// same video and page size.
    #[must_use]
    pub fn next(&self, token: String) -> Self {
        Self {
            video_id: self.video_id.clone(),
            page_token: Some(token),
            max_results: self.max_results,
            page_number: self.page_number.saturating_add(1),
        }
    }

    /// Returns the video being paged.
    #[must_use]
    pub const fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// Returns the continuation token, absent for the first page.
    #[must_use]
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn max_results(&self) -> u8 {
        self.max_results
    }

    /// Returns the 1-based position of this page in the chain.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }
}

/// One page of top-level comment text returned by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPage {
    /// Comment bodies in API order.
    pub comments: Vec<String>,
    /// Cursor for the next page, if more results exist.
    pub next_page_token: Option<String>,
}

