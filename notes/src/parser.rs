use crate::sanitizer::sanitize_line;
use crate::types::{ReleaseNotes, Reference};
use crate::utils::{
    CATEGORY_HEADING, DEPENDABOT_ENTRY_PREFIX, DEPENDABOT_MARKER, DEPENDENCY_UPDATES,
    GENERAL_UPDATES,
};

#[derive(Debug, Clone)]
struct ParserState {
    current_category: String,
}

impl ParserState {
    fn new() -> Self {
        Self {
            current_category: GENERAL_UPDATES.to_string(),
        }
    }
}

/// Splits a pull request (or commit) body into categorized entries.
///
/// Lines starting with `###` open a new category named after the rest of the
/// line, lower-cased. Every other non-blank line is sanitized and appended to
/// the current category as `"<line> (#<reference>)"`. Text before the first
/// heading lands in the general updates category.
///
/// Dependency bot bodies are handled separately: only their `Bumps` lines are
/// kept, all under the dependency updates category.
pub fn parse_body(notes: &mut ReleaseNotes, body: Option<&str>, reference: &Reference) {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return;
    };

    if body.contains(DEPENDABOT_MARKER) {
        parse_dependabot_body(notes, body, reference);
        return;
    }

    let body = body.replace('\r', "");
    let mut state = ParserState::new();
    for line in body.split('\n') {
        parse_line(line, &mut state, notes, reference);
    }
}

fn parse_line(line: &str, state: &mut ParserState, notes: &mut ReleaseNotes, reference: &Reference) {
    if line.starts_with(CATEGORY_HEADING) {
        handle_category_heading(line, state, notes);
    } else if !line.is_empty() {
        if let Some(entry) = sanitize_line(line) {
            notes
                .category_mut(&state.current_category)
                .push(format_entry(entry, reference));
        }
    }
}

fn handle_category_heading(line: &str, state: &mut ParserState, notes: &mut ReleaseNotes) {
    let category = line.replace(CATEGORY_HEADING, "").trim().to_lowercase();
    notes.category_mut(&category);
    state.current_category = category;
}

fn parse_dependabot_body(notes: &mut ReleaseNotes, body: &str, reference: &Reference) {
    let entries = notes.category_mut(DEPENDENCY_UPDATES);
    for line in body.lines() {
        if line.starts_with(DEPENDABOT_ENTRY_PREFIX) {
            entries.push(format_entry(line.trim(), reference));
        }
    }
}

fn format_entry(entry: &str, reference: &Reference) -> String {
    format!("{entry} (#{reference})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str, reference: Reference) -> ReleaseNotes {
        let mut notes = ReleaseNotes::new();
        parse_body(&mut notes, Some(body), &reference);
        notes
    }

    #[test]
    fn headings_open_categories_in_order() {
        let notes = parse(
            "### features\n- Added X\n### bugs\n- Fixed Y\n",
            Reference::PullRequest(42),
        );

        let names: Vec<_> = notes.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![GENERAL_UPDATES, "features", "bugs"]);
        assert_eq!(notes.get(GENERAL_UPDATES).unwrap(), [] as [&str; 0]);
        assert_eq!(notes.get("features").unwrap(), ["Added X (#42)"]);
        assert_eq!(notes.get("bugs").unwrap(), ["Fixed Y (#42)"]);
    }

    #[test]
    fn heading_names_are_normalized() {
        let notes = parse("###   New Features  \r\n* thing\r\n", Reference::PullRequest(7));
        assert_eq!(notes.get("new features").unwrap(), ["thing (#7)"]);
    }

    #[test]
    fn duplicate_headings_reuse_the_category() {
        let mut notes = parse("### Bugs\n- one\n", Reference::PullRequest(1));
        parse_body(&mut notes, Some("### bugs\n- two\n### BUGS\n- three"), &Reference::PullRequest(2));

        assert_eq!(notes.category_count(), 2);
        assert_eq!(notes.get("bugs").unwrap(), ["one (#1)", "two (#2)", "three (#2)"]);
    }

    #[test]
    fn text_without_headings_goes_to_general_updates() {
        let notes = parse("Some intro\n\n- detail\n", Reference::commit("abcdef123456"));
        assert_eq!(
            notes.get(GENERAL_UPDATES).unwrap(),
            ["Some intro (#abcdef)", "detail (#abcdef)"]
        );
        assert_eq!(notes.rendered_categories().count(), 0);
    }

    #[test]
    fn empty_or_missing_body_adds_nothing() {
        let mut notes = ReleaseNotes::new();
        parse_body(&mut notes, None, &Reference::PullRequest(1));
        parse_body(&mut notes, Some(""), &Reference::PullRequest(2));
        assert_eq!(notes, ReleaseNotes::new());
    }

    #[test]
    fn placeholder_only_body_stays_empty() {
        let notes = parse("None", Reference::PullRequest(3));
        assert_eq!(notes, ReleaseNotes::new());
    }

    #[test]
    fn boilerplate_lines_are_dropped_inside_categories() {
        let notes = parse(
            "### Improvements\n<!-- what changed -->\n- Implemented XXX\n- Faster startup\n   \n",
            Reference::PullRequest(9),
        );
        assert_eq!(notes.get("improvements").unwrap(), ["Faster startup (#9)"]);
    }

    #[test]
    fn dependabot_body_keeps_only_bumps_lines() {
        let body = "Bumps [serde](https://github.com/serde-rs/serde) from 1.0.1 to 1.0.2.\n\
                    ### Release notes\n\
                    - lots of upstream notes\n\
                    Bumps [regex](https://github.com/rust-lang/regex) from 1.9 to 1.10.\n\
                    \n\
                    Dependabot commands and options\n\
                    You can trigger Dependabot actions by commenting on this PR\n";
        let notes = parse(body, Reference::PullRequest(12));

        let names: Vec<_> = notes.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![GENERAL_UPDATES, DEPENDENCY_UPDATES]);
        assert_eq!(
            notes.get(DEPENDENCY_UPDATES).unwrap(),
            [
                "Bumps [serde](https://github.com/serde-rs/serde) from 1.0.1 to 1.0.2. (#12)",
                "Bumps [regex](https://github.com/rust-lang/regex) from 1.9 to 1.10. (#12)",
            ]
        );
    }

    #[test]
    fn dependabot_detection_applies_per_body() {
        let mut notes = parse("### fixes\n- real fix\n", Reference::PullRequest(1));
        parse_body(
            &mut notes,
            Some("Bumps [a](x) from 1 to 2.\r\nDependabot commands and options\r\n"),
            &Reference::PullRequest(2),
        );
        parse_body(&mut notes, Some("- another fix\n"), &Reference::PullRequest(3));

        assert_eq!(notes.get("fixes").unwrap(), ["real fix (#1)"]);
        assert_eq!(notes.get(DEPENDENCY_UPDATES).unwrap(), ["Bumps [a](x) from 1 to 2. (#2)"]);
        assert_eq!(notes.get(GENERAL_UPDATES).unwrap(), ["another fix (#3)"]);
    }
}
