use semver::Version;

/// A tag and the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub commit: String,
}

impl TagRef {
    pub fn new(name: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit: commit.into(),
        }
    }
}

/// First tag whose name contains `needle`
pub fn find_tag<'a>(tags: &'a [TagRef], needle: &str) -> Option<&'a TagRef> {
    tags.iter().find(|tag| tag.name.contains(needle))
}

/// Last tag pointing at `commit`
pub fn tag_at<'a>(tags: &'a [TagRef], commit: &str) -> Option<&'a TagRef> {
    tags.iter().rev().find(|tag| tag.commit == commit)
}

/// Parses a tag name as a version. A leading `v` is ignored and missing
/// minor/patch components are filled with zero, so `v1.2` reads as `1.2.0`.
pub fn parse_tag_version(name: &str) -> Option<Version> {
    let trimmed = name.strip_prefix(['v', 'V']).unwrap_or(name);
    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let (core, rest) = match trimmed.find(['-', '+']) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    let padding = match core.split('.').count() {
        1 => ".0.0",
        2 => ".0",
        _ => return None,
    };
    Version::parse(&format!("{core}{padding}{rest}")).ok()
}

/// Tag with the greatest version strictly below `upper_bound`.
///
/// Tags that do not parse as versions are ignored. An unparseable or absent
/// bound accepts every version.
pub fn latest_tag_before<'a>(tags: &'a [TagRef], upper_bound: Option<&str>) -> Option<&'a TagRef> {
    let bound = upper_bound.and_then(parse_tag_version);

    tags.iter()
        .filter_map(|tag| parse_tag_version(&tag.name).map(|version| (version, tag)))
        .filter(|(version, _)| bound.as_ref().is_none_or(|bound| version < bound))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, tag)| tag)
}
