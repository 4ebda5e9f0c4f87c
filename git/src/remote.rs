use once_cell::sync::Lazy;
use regex::Regex;

static GITHUB_REMOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:git@github\.com:|ssh://git@github\.com/|https?://(?:[^@/]+@)?github\.com/)([^/]+/[^/]+?)(?:\.git)?/?$",
    )
    .expect("Failed to compile GitHub remote regex")
});

/// Extracts the `owner/repo` slug from a GitHub remote URL
pub fn github_slug(url: &str) -> Option<String> {
    GITHUB_REMOTE_PATTERN
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
