use crate::utils::{CONTINUATION_INDENT, WRAP_WIDTH};

/// Wraps an entry at [`WRAP_WIDTH`] characters. See [`wrap_line_at`].
pub fn wrap_line(line: &str) -> String {
    wrap_line_at(line, WRAP_WIDTH)
}

/// Reflows `line` into continuation lines shorter than `width` characters.
///
/// Lines of at most `width` characters are returned untouched. Longer lines
/// are split on whitespace and packed greedily; every continuation line
/// starts with a newline and a four space indent. Words are never split, so a
/// word of `width` characters or more ends up alone on an oversized line.
pub fn wrap_line_at(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len < width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(&format!("\n{CONTINUATION_INDENT}"))
}
