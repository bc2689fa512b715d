//! Shiplog Changelog - Grouped changelog generation from PR release notes
//!
//! This crate extracts tagged release-note blocks from pull-request bodies,
//! buckets them into a fixed, ordered section catalog, and renders the
//! result as a deterministic markdown document.

pub mod extract;
pub mod generator;
pub mod render;
pub mod types;

pub use extract::extract_release_notes;
pub use generator::ChangelogGenerator;
pub use render::{ChangelogRenderer, MarkdownRenderer};
pub use types::{ReleaseNote, Section, Sections};
