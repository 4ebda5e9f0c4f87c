use once_cell::sync::Lazy;
use regex::Regex;

/// Category that collects text found before the first `###` heading.
/// It is never rendered.
pub const GENERAL_UPDATES: &str = "general updates";

/// Category used for every entry of a dependency bot pull request
pub const DEPENDENCY_UPDATES: &str = "dependency updates";

/// Marker found in the body of dependency bot pull requests
pub const DEPENDABOT_MARKER: &str = "Dependabot commands and options";

/// Prefix of the lines kept from a dependency bot body
pub const DEPENDABOT_ENTRY_PREFIX: &str = "Bumps";

pub const CATEGORY_HEADING: &str = "###";

/// Maximum width of a wrapped bullet entry. Two spaces, a dash and a space
/// precede each entry, which keeps the rendered line under 80 columns.
pub const WRAP_WIDTH: usize = 76;

pub const CONTINUATION_INDENT: &str = "    ";

pub const GUIDELINES_LINK: &str = "Please make sure to follow the [DEV guidelines]";

/// Template lines that are dropped verbatim from pull request bodies
pub const PLACEHOLDER_LINES: [&str; 4] = [
    "Description about what this pull request does.",
    "Implemented XXX",
    "This pull request was generated automatically.",
    "None",
];

pub static HTML_COMMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^<!--.*-->$").expect("Failed to compile HTML comment regex"));

/// Title-cases a category name: the first letter of every run of letters is
/// upper-cased and the rest lower-cased (`"bug-fixes"` becomes `"Bug-Fixes"`).
pub fn title_case(s: &str) -> String {
    let mut titled = String::with_capacity(s.len());
    let mut previous_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            titled.push(c);
            previous_is_letter = false;
        }
    }
    titled
}
