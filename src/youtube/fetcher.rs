//! High-level comment fetcher used by batch processing.

use super::error::ExtractError;
use super::gateway::CommentThreadGateway;
use super::locator::VideoId;
use super::models::CommentCollection;
use super::pagination::PageRequest;

/// Follows the continuation-token chain of a gateway until it is exhausted.
pub struct CommentFetcher<'client, Gateway>
where
    Gateway: CommentThreadGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> CommentFetcher<'client, Gateway>
where
    Gateway: CommentThreadGateway,
{
    /// Create a new fetcher using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load every top-level comment for `video_id` in API order.
    ///
    /// Each page is requested at the maximum page size. An empty first page
    /// yields an empty collection rather than an error.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure without retrying; comments from
    /// earlier pages are discarded. Returns [`ExtractError::Api`] when the
    /// API hands back the token that was just used.
    pub fn fetch(&self, video_id: &VideoId) -> Result<CommentCollection, ExtractError> {
        let mut request = PageRequest::first(video_id.clone());
        let mut comments = Vec::new();

        loop {
            let page = self.client.comment_thread_page(&request)?;
            tracing::debug!(
                video_id = %video_id,
                page = request.page_number(),
                items = page.comments.len(),
                "received comment thread page"
            );
            comments.extend(page.comments);

            let Some(token) = page.next_page_token else {
                break;
            };
            if request.page_token() == Some(token.as_str()) {
                return Err(ExtractError::Api {
                    message: format!(
                        "comment threads for {video_id} repeated page token on page {}",
                        request.page_number()
                    ),
                });
            }
            request = request.next(token);
        }

        tracing::info!(
            video_id = %video_id,
            pages = request.page_number(),
            comments = comments.len(),
            "fetched comments"
        );
        Ok(CommentCollection::new(video_id.clone(), comments))
    }
}
