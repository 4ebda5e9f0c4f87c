use crate::error::NotesError;
use crate::utils::GENERAL_UPDATES;
use std::fmt::{self, Display, Formatter};

/// Type alias for Result with `NotesError`
pub type Result<T> = std::result::Result<T, NotesError>;

/// Number of characters of a commit SHA kept in a commit reference
pub const SHORT_SHA_LEN: usize = 6;

/// Token appended to every entry so readers can trace it back to its source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    PullRequest(u64),
    Commit(String),
}

impl Reference {
    /// Builds a commit reference from a full (or already short) SHA
    pub fn commit(sha: &str) -> Self {
        Self::Commit(sha.chars().take(SHORT_SHA_LEN).collect())
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::PullRequest(number) => write!(f, "{number}"),
            Self::Commit(sha) => f.write_str(sha),
        }
    }
}

/// A named group of release note entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<String>,
}

/// Release notes grouped by category, in the order categories were first seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    categories: Vec<Category>,
}

impl Default for ReleaseNotes {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseNotes {
    /// Creates a collection holding only the empty general updates category
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: vec![Category {
                name: GENERAL_UPDATES.to_string(),
                entries: Vec::new(),
            }],
        }
    }

    /// Builds the collection from `(reference, body)` pairs in order
    pub fn from_bodies<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = (Reference, Option<S>)>,
        S: AsRef<str>,
    {
        let mut notes = Self::new();
        for (reference, body) in bodies {
            notes.add_body(&reference, body.as_ref().map(AsRef::as_ref));
        }
        notes
    }

    /// Parses a pull request or commit body into this collection
    pub fn add_body(&mut self, reference: &Reference, body: Option<&str>) {
        crate::parser::parse_body(self, body, reference);
    }

    /// Returns the entries of `name`, inserting an empty category at the end
    /// if it has not been seen yet
    pub fn category_mut(&mut self, name: &str) -> &mut Vec<String> {
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(Category {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx].entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.entries.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Categories that appear in exported notes: everything except general
    /// updates, skipping categories without entries
    pub fn rendered_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|c| c.name != GENERAL_UPDATES && !c.entries.is_empty())
    }

    /// Number of categories, including the always present general updates
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Whether any category would show up in an export
    #[must_use]
    pub fn has_rendered_entries(&self) -> bool {
        self.rendered_categories().next().is_some()
    }
}
