use crate::utils::{GUIDELINES_LINK, HTML_COMMENT_PATTERN, PLACEHOLDER_LINES};

/// Strips surrounding whitespace and leading bullet markers from a body line.
/// Returns `None` for template boilerplate and HTML comments.
pub fn sanitize_line(line: &str) -> Option<&str> {
    let line = line
        .trim()
        .trim_matches('*')
        .trim()
        .trim_matches('-')
        .trim()
        .trim_matches('-')
        .trim();

    if line.is_empty() || is_boilerplate(line) {
        return None;
    }

    Some(line)
}

fn is_boilerplate(line: &str) -> bool {
    line.contains(GUIDELINES_LINK)
        || PLACEHOLDER_LINES.contains(&line)
        || HTML_COMMENT_PATTERN.is_match(line)
}
