//! Support modules for the comment extraction BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    CommentCount, comments_disabled_response, fixture_exporter, key_rejected_response, page_body,
};
pub(crate) use state::{ExtractionState, ensure_runtime_and_server};
