//! Error mapping helpers for the HTTP comment thread gateway.

use reqwest::StatusCode;

use crate::youtube::error::ExtractError;
use crate::youtube::models::{ApiErrorBody, ApiErrorEnvelope};

const KEY_REJECTION_REASONS: &[&str] = &[
    "API_KEY_INVALID",
    "keyInvalid",
    "keyExpired",
    "API_KEY_SERVICE_BLOCKED",
    "accessNotConfigured",
    "ipRefererBlocked",
];

/// Checks if a status indicates an authentication failure.
const fn is_auth_status(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Maps a transport failure, stripping the request URL because it carries
/// the API key.
pub(super) fn map_transport_error(operation: &str, error: reqwest::Error) -> ExtractError {
    let stripped = error.without_url();
    if stripped.is_decode() {
        return ExtractError::Api {
            message: format!("{operation} response could not be decoded: {stripped}"),
        };
    }
    ExtractError::Network {
        message: format!("{operation} failed: {stripped}"),
    }
}

/// Maps a non-success response into the matching error variant.
pub(super) fn map_http_error(
    operation: &str,
    video_id: &str,
    status: StatusCode,
    body: &str,
) -> ExtractError {
    let details = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_default();

    if details.has_reason("commentsDisabled") {
        return ExtractError::CommentsDisabled {
            video_id: video_id.to_owned(),
        };
    }

    let message = describe(&details, body);
    if is_key_rejection(status, &details) {
        ExtractError::Authentication {
            message: format!("{operation} failed: YouTube returned {status} {message}"),
        }
    } else {
        ExtractError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

fn is_key_rejection(status: StatusCode, details: &ApiErrorBody) -> bool {
    if KEY_REJECTION_REASONS
        .iter()
        .any(|reason| details.has_reason(reason))
    {
        return true;
    }
    is_auth_status(status) && !details.has_reason("quotaExceeded")
}

fn describe(details: &ApiErrorBody, body: &str) -> String {
    if !details.message.is_empty() {
        return details.message.clone();
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "unknown error".to_owned()
    } else {
        truncate_for_message(trimmed, 160)
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output: String = message.chars().take(max_chars).collect();
    if message.chars().nth(max_chars).is_some() {
        output.push_str("...");
    }
    output
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use rstest::rstest;
    use serde_json::json;

    use super::map_http_error;
    use crate::youtube::error::ExtractError;

    fn envelope(code: u16, message: &str, reason: &str) -> String {
        json!({
            "error": {
                "code": code,
                "message": message,
                "errors": [{
                    "message": message,
                    "domain": "youtube.commentThread",
                    "reason": reason
                }]
            }
        })
        .to_string()
    }

    #[rstest]
    fn invalid_key_on_bad_request_is_authentication() {
        let body = json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{"reason": "badRequest"}],
                "details": [{"reason": "API_KEY_INVALID"}]
            }
        })
        .to_string();

        let error = map_http_error("comment threads", "abc123", StatusCode::BAD_REQUEST, &body);

        assert!(
            matches!(
                &error,
                ExtractError::Authentication { message } if message.contains("API key not valid")
            ),
            "expected Authentication, got {error:?}"
        );
    }

    #[rstest]
    fn comments_disabled_names_the_video() {
        let body = envelope(403, "The video has disabled comments.", "commentsDisabled");

        let error = map_http_error("comment threads", "abc123", StatusCode::FORBIDDEN, &body);

        assert_eq!(
            error,
            ExtractError::CommentsDisabled {
                video_id: "abc123".to_owned()
            }
        );
    }

    #[rstest]
    fn quota_exhaustion_is_an_api_error() {
        let body = envelope(403, "quota exceeded", "quotaExceeded");

        let error = map_http_error("comment threads", "abc123", StatusCode::FORBIDDEN, &body);

        assert!(
            matches!(error, ExtractError::Api { .. }),
            "expected Api, got {error:?}"
        );
    }

    #[rstest]
    fn missing_video_is_an_api_error_with_status() {
        let body = envelope(
            404,
            "The video identified by the videoId parameter could not be found.",
            "videoNotFound",
        );

        let error = map_http_error("comment threads", "nope", StatusCode::NOT_FOUND, &body);

        assert!(
            matches!(
                &error,
                ExtractError::Api { message }
                    if message.contains("404") && message.contains("could not be found")
            ),
            "expected Api with status, got {error:?}"
        );
    }

    #[rstest]
    fn unauthorised_without_envelope_uses_raw_body() {
        let error = map_http_error(
            "comment threads",
            "abc123",
            StatusCode::UNAUTHORIZED,
            "gateway says no",
        );

        assert!(
            matches!(
                &error,
                ExtractError::Authentication { message } if message.contains("gateway says no")
            ),
            "expected Authentication, got {error:?}"
        );
    }

    #[rstest]
    fn empty_body_reports_unknown_error() {
        let error = map_http_error("comment threads", "abc123", StatusCode::BAD_GATEWAY, "");

        assert!(
            matches!(&error, ExtractError::Api { message } if message.contains("unknown error")),
            "expected Api, got {error:?}"
        );
    }
}
