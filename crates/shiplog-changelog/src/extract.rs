//! Release-note extraction from PR bodies
//!
//! PR descriptions declare release notes as fenced blocks tagged with a
//! change type, an optional parenthesized subtype, and an audience:
//!
//! ~~~text
//! ```feature internal
//! Adds support for saved searches
//! ```
//! ~~~

use std::sync::LazyLock;

use regex::Regex;
use shiplog_core::types::PullRequest;
use tracing::trace;

use crate::types::ReleaseNote;

/// Regex for tagged release-note blocks
///
/// Tags are ASCII letters only. `.` does not span newlines, so the body
/// capture is the single line directly preceding the closing fence; the
/// `\s*` after the audience may absorb blank lines before that body line.
static NOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"```(?P<type>[a-zA-Z]+)(?:\((?P<subtype>[a-zA-Z]+)\))?\s*(?P<audience>[a-zA-Z]+)\s*\r?\n(?P<body>.*)\n```",
    )
    .expect("Invalid regex")
});

/// Longest trimmed body still treated as the "NONE" placeholder
const PLACEHOLDER_MAX_LEN: usize = 6;

/// Extract all release notes declared in a PR body
///
/// Notes are returned in the order their blocks appear. Bodies that are
/// empty or hold only the "NONE" placeholder are dropped. A body with no
/// matching blocks yields an empty vector; that is normal, not an error.
pub fn extract_release_notes(pr: &PullRequest) -> Vec<ReleaseNote<'_>> {
    let mut notes = Vec::new();

    for caps in NOTE_REGEX.captures_iter(&pr.body) {
        let body = normalize_line_endings(&caps["body"]);
        if body.is_empty() || is_placeholder(&body) {
            continue;
        }

        notes.push(ReleaseNote {
            pr,
            body,
            change_type: caps["type"].to_lowercase(),
            change_subtype: caps.name("subtype").map(|m| m.as_str().to_lowercase()),
            audience: caps["audience"].to_lowercase(),
        });
    }

    trace!(pr = pr.number, count = notes.len(), "extracted release notes");
    notes
}

/// Replace Windows line endings with plain newlines
fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n")
}

/// Check for the "NONE" placeholder authors leave in unused note templates
///
/// Exact equality after trimming, capped at a short length so longer text
/// that merely starts like the placeholder is kept.
fn is_placeholder(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.len() <= PLACEHOLDER_MAX_LEN && trimmed.eq_ignore_ascii_case("none")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pr(body: &str) -> PullRequest {
        PullRequest::new(7, "test pr").with_body(body)
    }

    #[test]
    fn test_extract_basic_note() {
        let pr = make_pr("Intro text.\n```feature internal\nAdds support for X\n```\n");
        let notes = extract_release_notes(&pr);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].change_type, "feature");
        assert_eq!(notes[0].audience, "internal");
        assert_eq!(notes[0].body, "Adds support for X");
        assert!(notes[0].change_subtype.is_none());
        assert_eq!(notes[0].pr.number, 7);
    }

    #[test]
    fn test_extract_subtype() {
        let pr = make_pr("```bugfix(Parser) external\nHandles empty input\n```");
        let notes = extract_release_notes(&pr);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].change_type, "bugfix");
        assert_eq!(notes[0].change_subtype.as_deref(), Some("parser"));
        assert_eq!(notes[0].audience, "external");
    }

    #[test]
    fn test_tags_are_lowercased() {
        let pr = make_pr("```Feature INTERNAL\nShouts less\n```");
        let notes = extract_release_notes(&pr);

        assert_eq!(notes[0].change_type, "feature");
        assert_eq!(notes[0].audience, "internal");
    }

    #[test]
    fn test_multiple_blocks_in_order() {
        let body = "\
First change:
```bugfix external
Fixes the login redirect
```
Second change:
```bugfix internal
Reworks session bookkeeping
```
";
        let pr = make_pr(body);
        let notes = extract_release_notes(&pr);

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].audience, "external");
        assert_eq!(notes[0].body, "Fixes the login redirect");
        assert_eq!(notes[1].audience, "internal");
    }

    #[test]
    fn test_no_blocks_yields_empty() {
        let pr = make_pr("Just a plain description.\n\nNo notes here.");

        assert!(extract_release_notes(&pr).is_empty());
    }

    #[test]
    fn test_untagged_code_fence_ignored() {
        let pr = make_pr("```\nlet x = 1;\n```");

        assert!(extract_release_notes(&pr).is_empty());
    }

    #[test]
    fn test_none_placeholder_dropped() {
        let pr = make_pr("```feature internal\nNONE\n```");

        assert!(extract_release_notes(&pr).is_empty());
    }

    #[test]
    fn test_none_placeholder_case_insensitive() {
        let pr = make_pr("```feature internal\nnone\n```");

        assert!(extract_release_notes(&pr).is_empty());
    }

    #[test]
    fn test_none_with_more_text_kept() {
        let pr = make_pr("```feature internal\nNONE but with more text\n```");
        let notes = extract_release_notes(&pr);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body, "NONE but with more text");
    }

    #[test]
    fn test_empty_body_dropped() {
        let pr = make_pr("```feature internal\n\n```");

        assert!(extract_release_notes(&pr).is_empty());
    }

    #[test]
    fn test_crlf_header_tolerated() {
        let pr = make_pr("```feature internal\r\nWorks on Windows exports\r\n```");
        let notes = extract_release_notes(&pr);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body.trim_end(), "Works on Windows exports");
    }

    #[test]
    fn test_blank_lines_before_body_absorbed() {
        let pr = make_pr("```feature internal\n\nShips the new importer\n```");
        let notes = extract_release_notes(&pr);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body, "Ships the new importer");
    }

    #[test]
    fn test_two_line_body_does_not_match() {
        // The body capture does not span newlines, so a two-line note is
        // not a valid block at all.
        let pr = make_pr("```feature internal\nFirst line\nSecond line\n```");

        assert!(extract_release_notes(&pr).is_empty());
    }

    #[test]
    fn test_non_ascii_tag_rejected() {
        let pr = make_pr("```función internal\nAdds localized parsing\n```");

        assert!(extract_release_notes(&pr).is_empty());
    }
}
