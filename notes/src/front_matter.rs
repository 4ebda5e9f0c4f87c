use chrono::{Local, NaiveDate};
use std::fmt::{self, Display, Formatter};

/// Metadata block rendered under the title of every export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub repository: String,
    pub since_tag: String,
    /// Stop tag, or the stop commit SHA when no tag names it
    pub to_ref: String,
    pub generated: NaiveDate,
}

impl FrontMatter {
    /// Front matter dated today
    pub fn new(
        repository: impl Into<String>,
        since_tag: impl Into<String>,
        to_ref: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            since_tag: since_tag.into(),
            to_ref: to_ref.into(),
            generated: Local::now().date_naive(),
        }
    }
}

impl Display for FrontMatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "For: {}", self.repository)?;
        writeln!(f, "Notes since tag: {}", self.since_tag)?;
        writeln!(f, "Notes to tag/commit: {}", self.to_ref)?;
        writeln!(f, "Generated: {}", self.generated.format("%Y-%m-%d"))
    }
}
