//! Changelog generation

use shiplog_core::types::PullRequest;
use tracing::{debug, info, instrument};

use crate::extract::extract_release_notes;
use crate::render::{ChangelogRenderer, MarkdownRenderer};
use crate::types::Sections;

/// Changelog generator
///
/// Drives the pipeline: extract release notes from each PR, classify them
/// into the standard section catalog, render the final document.
pub struct ChangelogGenerator {
    renderer: Box<dyn ChangelogRenderer>,
}

impl ChangelogGenerator {
    /// Create a new generator with the default markdown renderer
    pub fn new() -> Self {
        Self {
            renderer: Box::new(MarkdownRenderer::new()),
        }
    }

    /// Use a custom renderer
    pub fn with_renderer<R: ChangelogRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Collect release notes from the PRs into the standard sections
    ///
    /// Section contents keep input-array order across PRs and block order
    /// within a PR.
    #[instrument(skip(self, prs), fields(pr_count = prs.len()))]
    pub fn generate<'a>(&self, prs: &'a [PullRequest]) -> Sections<'a> {
        info!(pr_count = prs.len(), "generating changelog");
        let mut sections = Sections::standard();

        for pr in prs {
            for note in extract_release_notes(pr) {
                sections.add(note);
            }
        }

        debug!(note_count = sections.note_count(), "sections built");
        sections
    }

    /// Render aggregated sections to the final markdown document
    pub fn format(&self, sections: &Sections<'_>) -> String {
        self.renderer.render(sections)
    }

    /// Generate and render in one step
    #[instrument(skip(self, prs), fields(pr_count = prs.len()))]
    pub fn generate_formatted(&self, prs: &[PullRequest]) -> String {
        let sections = self.generate(prs);
        let output = self.format(&sections);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}

impl Default for ChangelogGenerator {
    fn default() -> Self {
        Self::new()
    }
}
