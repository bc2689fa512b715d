//! Markdown rendering of aggregated sections

use std::collections::BTreeMap;

use tracing::debug;

use crate::types::{ReleaseNote, Section, Sections};

/// Document header, followed by the rendered sections
const DOCUMENT_HEADER: &str = "# Changelog\n\n\n";

/// Attribution marker used in place of a login for automation accounts
const BOT_AUTHOR_MARKER: &str = "⚙️";

/// Trait for changelog renderers
pub trait ChangelogRenderer: Send + Sync {
    /// Render the aggregated sections to the final document
    fn render(&self, sections: &Sections<'_>) -> String;
}

/// The markdown changelog renderer
///
/// Output is deterministic: sections render in catalog order, audiences in
/// ascending byte order, notes in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    fn render_section(&self, output: &mut String, section: &Section<'_>) {
        if section.is_empty() {
            return;
        }

        output.push_str(&format!("## {}\n\n", section.title));

        for (audience, notes) in notes_by_audience(&section.notes) {
            output.push_str(&format!("#### [{}]\n", audience.to_uppercase()));
            for note in notes {
                let author = if note.pr.author.is_bot {
                    BOT_AUTHOR_MARKER.to_string()
                } else {
                    format!("@{}", note.pr.author.login)
                };
                output.push_str(&format!(
                    "- {} **(#{}, {})**\n",
                    indent_continuations(note.body.trim()),
                    note.pr.number,
                    author
                ));
            }
        }

        output.push('\n');
    }
}

impl ChangelogRenderer for MarkdownRenderer {
    fn render(&self, sections: &Sections<'_>) -> String {
        let mut output = String::new();
        output.push_str(DOCUMENT_HEADER);

        for section in sections.iter() {
            self.render_section(&mut output, section);
        }

        output.push('\n');
        debug!(output_len = output.len(), "changelog rendered");
        output
    }
}

/// Group a section's notes by audience, audiences in ascending byte order
///
/// Note order inside each group stays the stored order. A BTreeMap keys the
/// groups so iteration never depends on a hash seed.
fn notes_by_audience<'s, 'a>(
    notes: &'s [ReleaseNote<'a>],
) -> BTreeMap<&'s str, Vec<&'s ReleaseNote<'a>>> {
    let mut by_audience: BTreeMap<&str, Vec<&ReleaseNote<'_>>> = BTreeMap::new();
    for note in notes {
        by_audience
            .entry(note.audience.as_str())
            .or_default()
            .push(note);
    }
    by_audience
}

/// Indent the continuation lines of a multi-line body by two spaces
///
/// The first line stays flush against the bullet marker; continuation lines
/// line up under the text rather than the bullet.
fn indent_continuations(body: &str) -> String {
    body.replace('\n', "\n  ")
}
