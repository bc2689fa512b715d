//! Shiplog Core - Foundational types for changelog generation
//!
//! This crate provides the pull-request input records, the PR info file
//! loader, and the error types shared across the shiplog tool.

pub mod error;
pub mod input;
pub mod types;

pub use error::{InputError, Result, ShiplogError};
pub use input::load_pull_requests;
pub use types::{PrAuthor, PullRequest};
