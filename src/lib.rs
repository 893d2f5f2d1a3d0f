//! YouTube comment extraction library.
//!
//! The library pages through the YouTube Data API v3 comment threads for a
//! list of videos, keeps the original text of each top-level comment, and
//! renders every non-empty result as a CSV table and a PDF document.
//!
//! - [`youtube`]: identifiers, the HTTP gateway, and the paging fetcher
//! - [`export`]: CSV and PDF rendering
//! - [`batch`]: per-video orchestration and artifact delivery
//! - [`config`]: layered configuration for the command-line front end

pub mod batch;
pub mod config;
pub mod export;
pub mod youtube;

pub use batch::{
    ArtifactSink, BatchReport, DeliveredArtifact, DirectoryArtifactSink, MemoryArtifactSink,
    VideoOutcome, VideoReport, process_batch,
};
pub use config::ExtractorConfig;
pub use export::{
    CollectionExporter, DocumentFont, DocumentStyle, ExportArtifact, ExportFormat, Exporter,
};
pub use youtube::{
    ApiKey, CommentCollection, CommentFetcher, CommentPage, CommentThreadGateway, ExtractError,
    GatewaySettings, HttpCommentThreadGateway, PageRequest, VideoId, split_video_ids,
};
