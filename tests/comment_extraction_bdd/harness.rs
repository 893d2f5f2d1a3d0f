//! Response builders and the exporter for comment extraction BDD tests.

use std::str::FromStr;

use camino::Utf8Path;
use serde_json::json;
use wiremock::ResponseTemplate;
use ytcomments::{DocumentFont, DocumentStyle, Exporter, ExtractError};

const FIXTURE_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/RobotoMedium.ttf");

/// Number of comments or requests in a step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommentCount(usize);

impl CommentCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for CommentCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Builds one `commentThreads` page.
pub(crate) fn page_body(
    video_id: &str,
    indices: std::ops::Range<usize>,
    next_page_token: Option<&str>,
) -> serde_json::Value {
    let items: Vec<serde_json::Value> = indices
        .map(|i| {
            json!({
                "kind": "youtube#commentThread",
                "snippet": {
                    "videoId": video_id,
                    "topLevelComment": {
                        "snippet": {"textOriginal": format!("Comment {i} on {video_id}")}
                    }
                }
            })
        })
        .collect();

    let mut body = json!({"kind": "youtube#commentThreadListResponse", "items": items});
    if let (Some(token), Some(object)) = (next_page_token, body.as_object_mut()) {
        object.insert("nextPageToken".to_owned(), json!(token));
    }
    body
}

/// Response YouTube sends when a video has comments turned off.
pub(crate) fn comments_disabled_response() -> ResponseTemplate {
    ResponseTemplate::new(403).set_body_json(json!({
        "error": {
            "code": 403,
            "message": "The video identified by the videoId parameter has disabled comments.",
            "errors": [{"reason": "commentsDisabled", "domain": "youtube.commentThread"}]
        }
    }))
}

/// Response YouTube sends for an invalid API key.
pub(crate) fn key_rejected_response() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "errors": [{"reason": "badRequest", "domain": "global"}],
            "details": [{"reason": "API_KEY_INVALID"}]
        }
    }))
}

/// Exporter rendering PDFs with the font shipped under `tests/fixtures/`.
pub(crate) fn fixture_exporter() -> Result<Exporter, ExtractError> {
    let font = DocumentFont::load(Utf8Path::new(FIXTURE_FONT))?;
    Ok(Exporter::new(font, DocumentStyle::default()))
}
