//! Release-note and section types

use shiplog_core::types::PullRequest;

/// Sentinel id of the catch-all section
pub const OTHER_SECTION_ID: &str = "other";

/// Display title of the catch-all section
pub const OTHER_SECTION_TITLE: &str = "➕ Other";

/// Declared section catalog, in render order
///
/// Each entry pairs a change-type id with its display title. The catalog is
/// fixed at compile time; notes with any other change type land in the
/// catch-all section.
pub const SECTION_CATALOG: &[(&str, &str)] = &[
    ("breaking", "🚨 Breaking"),
    ("feature", "🚀 Features"),
    ("bugfix", "🐛 Bugfixes"),
    ("refactor", "🛠️ Refactorings"),
    ("doc", "📚 Documentation"),
    ("chore", "🔧 Chores"),
];

/// A release note extracted from one fenced block in a PR body
#[derive(Debug, Clone)]
pub struct ReleaseNote<'a> {
    /// The PR the note was extracted from
    pub pr: &'a PullRequest,
    /// Note text with line endings normalized to `\n`; trimmed at render time
    pub body: String,
    /// Change-type tag, lowercased (e.g. "feature")
    pub change_type: String,
    /// Optional secondary tag, lowercased; parsed but not used for grouping
    pub change_subtype: Option<String>,
    /// Audience tag, lowercased, used for sub-grouping (e.g. "internal")
    pub audience: String,
}

/// A named bucket of release notes for one change type
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Stable id matched against note change types
    pub id: String,
    /// Display title, includes the leading emoji
    pub title: String,
    /// Notes in stable append order
    pub notes: Vec<ReleaseNote<'a>>,
}

impl<'a> Section<'a> {
    /// Create a new empty section
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            notes: Vec::new(),
        }
    }

    /// Append a note to the section
    pub fn add_note(&mut self, note: ReleaseNote<'a>) {
        self.notes.push(note);
    }

    /// Check if the section has no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// The ordered section catalog plus the catch-all
///
/// Declared sections are held as an ordered list and searched linearly on
/// classification, so iteration order is always the declared order with the
/// catch-all last — never a hash map's.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    declared: Vec<Section<'a>>,
    other: Section<'a>,
}

impl<'a> Sections<'a> {
    /// Create an empty section set with only the catch-all
    pub fn new() -> Self {
        Self {
            declared: Vec::new(),
            other: Section::new(OTHER_SECTION_ID, OTHER_SECTION_TITLE),
        }
    }

    /// Declare a section; later `add` calls match notes against its id
    pub fn with_section(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.declared.push(Section::new(id, title));
        self
    }

    /// Build the fixed standard catalog
    pub fn standard() -> Self {
        let mut sections = Self::new();
        for (id, title) in SECTION_CATALOG {
            sections = sections.with_section(*id, *title);
        }
        sections
    }

    /// Classify a note into its section
    ///
    /// Notes whose change type matches no declared section land in the
    /// catch-all; classification always succeeds.
    pub fn add(&mut self, note: ReleaseNote<'a>) {
        match self
            .declared
            .iter_mut()
            .find(|section| section.id == note.change_type)
        {
            Some(section) => section.add_note(note),
            None => self.other.add_note(note),
        }
    }

    /// Iterate sections in render order: declared order, catch-all last
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = &'s Section<'a>> + 's {
        self.declared.iter().chain(std::iter::once(&self.other))
    }

    /// Total number of classified notes
    pub fn note_count(&self) -> usize {
        self.iter().map(|section| section.notes.len()).sum()
    }
}

impl Default for Sections<'_> {
    fn default() -> Self {
        Self::new()
    }
}
