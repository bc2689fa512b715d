//! Pull-request input records

use serde::{Deserialize, Serialize};

/// A pull request as fetched from the forge API
///
/// Records arrive as a pre-fetched JSON array. Unknown fields are ignored
/// and missing fields fall back to their zero values, so the schema
/// tolerates forge API drift in either direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    /// PR number, unique within the repository
    pub number: u64,
    /// PR title (part of the input schema; not rendered)
    pub title: String,
    /// Free-text PR description, may embed release-note blocks
    pub body: String,
    /// Link to the PR (not rendered)
    pub url: String,
    /// PR author
    pub author: PrAuthor,
}

impl PullRequest {
    /// Create a new pull request record
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: String::new(),
            url: String::new(),
            author: PrAuthor::default(),
        }
    }

    /// Set the PR body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the PR url
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the PR author
    pub fn with_author(mut self, author: PrAuthor) -> Self {
        self.author = author;
        self
    }
}

/// Author of a pull request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrAuthor {
    /// Forge-side account id
    pub id: String,
    /// Display name
    pub name: String,
    /// Login handle, rendered as `@login` in attributions
    pub login: String,
    /// Whether the account is an automation account
    pub is_bot: bool,
}

impl PrAuthor {
    /// Create a new author with a login handle
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            login: login.into(),
            is_bot: false,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the author as an automation account
    pub fn as_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }
}
