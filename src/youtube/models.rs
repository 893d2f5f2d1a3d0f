//! Data models for comment thread listings.
//!
//! Types prefixed with `Api` are internal deserialisation targets for the
//! `commentThreads` response; they convert into [`CommentPage`] so nothing
//! beyond the comment text escapes this module.

use serde::Deserialize;

use super::locator::VideoId;
use super::pagination::CommentPage;

/// Ordered comment text gathered by one fetch for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCollection {
    video_id: VideoId,
    comments: Vec<String>,
}

impl CommentCollection {
    /// Wraps comments fetched for `video_id`, keeping their order.
    #[must_use]
    pub const fn new(video_id: VideoId, comments: Vec<String>) -> Self {
        Self { video_id, comments }
    }

    /// Returns the video the comments belong to.
    #[must_use]
    pub const fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// Returns the comment bodies in API order.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Number of comments collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Returns true when the video yielded no comments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiCommentThreadList {
    #[serde(default)]
    items: Vec<ApiCommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiCommentThread {
    snippet: ApiThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiThreadSnippet {
    top_level_comment: ApiComment,
}

#[derive(Debug, Deserialize)]
struct ApiComment {
    snippet: ApiCommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCommentSnippet {
    #[serde(default)]
    text_original: String,
}

impl From<ApiCommentThreadList> for CommentPage {
    fn from(list: ApiCommentThreadList) -> Self {
        Self {
            comments: list
                .items
                .into_iter()
                .map(|thread| thread.snippet.top_level_comment.snippet.text_original)
                .collect(),
            next_page_token: list.next_page_token.filter(|token| !token.is_empty()),
        }
    }
}

/// Google API error envelope returned with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) errors: Vec<ApiErrorReason>,
    #[serde(default)]
    pub(crate) details: Vec<ApiErrorReason>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorReason {
    #[serde(default)]
    pub(crate) reason: String,
}

impl ApiErrorBody {
    /// Returns true if any listed reason matches `reason`.
    pub(crate) fn has_reason(&self, reason: &str) -> bool {
        self.errors
            .iter()
            .chain(&self.details)
            .any(|entry| entry.reason == reason)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{ApiCommentThreadList, ApiErrorEnvelope, CommentPage};

    #[rstest]
    fn extracts_top_level_text_in_order() {
        let list: ApiCommentThreadList = serde_json::from_value(json!({
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "QURTSl9p",
            "items": [
                {"snippet": {"topLevelComment": {"snippet": {
                    "textOriginal": "first",
                    "textDisplay": "<b>first</b>"
                }}, "totalReplyCount": 3}},
                {"snippet": {"topLevelComment": {"snippet": {"textOriginal": "second\nline"}}}}
            ]
        }))
        .expect("list should decode");

        let page = CommentPage::from(list);

        assert_eq!(page.comments, vec!["first", "second\nline"]);
        assert_eq!(page.next_page_token.as_deref(), Some("QURTSl9p"));
    }

    #[rstest]
    fn missing_items_and_token_yield_empty_final_page() {
        let list: ApiCommentThreadList =
            serde_json::from_value(json!({"kind": "youtube#commentThreadListResponse"}))
                .expect("list should decode");

        let page = CommentPage::from(list);

        assert!(page.comments.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[rstest]
    fn blank_token_ends_pagination() {
        let list: ApiCommentThreadList =
            serde_json::from_value(json!({"items": [], "nextPageToken": ""}))
                .expect("list should decode");

        assert!(CommentPage::from(list).next_page_token.is_none());
    }

    #[rstest]
    fn error_envelope_reports_reasons_from_errors_and_details() {
        let envelope: ApiErrorEnvelope = serde_json::from_value(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{"reason": "badRequest"}],
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "API_KEY_INVALID"
                }]
            }
        }))
        .expect("envelope should decode");

        assert!(envelope.error.has_reason("badRequest"));
        assert!(envelope.error.has_reason("API_KEY_INVALID"));
        assert!(!envelope.error.has_reason("commentsDisabled"));
    }
}
