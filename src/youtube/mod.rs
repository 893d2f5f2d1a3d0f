//! YouTube comment thread retrieval.
//!
//! This module pages through the Data API v3 `commentThreads` listing for a
//! video, following `nextPageToken` until the chain ends, and keeps only the
//! original text of each top-level comment. Failures are mapped into
//! [`ExtractError`] variants so callers can report them without touching
//! HTTP details.

pub mod error;
pub mod fetcher;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::ExtractError;
pub use fetcher::CommentFetcher;
pub use gateway::{
    CommentThreadGateway, DEFAULT_API_BASE_URL, GatewaySettings, HttpCommentThreadGateway,
};
pub use locator::{ApiKey, VideoId, split_video_ids};
pub use models::CommentCollection;
pub use pagination::{CommentPage, MAX_RESULTS_PER_PAGE, PageRequest};

#[cfg(test)]
pub use gateway::MockCommentThreadGateway;
