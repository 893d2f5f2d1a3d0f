//! CLI handlers.
//!
//! - [`extract`]: fetch and export comments for the configured videos
//!
//! Output formatting utilities are in [`output`].

pub mod extract;
pub mod output;
