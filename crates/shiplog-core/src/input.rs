//! PR info file loading

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{InputError, Result};
use crate::types::PullRequest;

/// Load pull-request records from a JSON file
///
/// The file must hold a single JSON array of PR objects. Any read or parse
/// failure aborts the run before output is produced; a PR whose body holds
/// no release-note blocks is normal input, not an error.
pub fn load_pull_requests(path: &Path) -> Result<Vec<PullRequest>> {
    let data = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let prs: Vec<PullRequest> = serde_json::from_str(&data).map_err(InputError::Parse)?;

    debug!(count = prs.len(), path = %path.display(), "loaded pull requests");
    Ok(prs)
}
