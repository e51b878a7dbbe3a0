use std::fmt::Display;

/// represents a single tag equality clause of an overpass API query,
/// rendered as `["key"="value"]`.
/// see <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22)>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    /// the key in the tag's key/value pair to match against
    tag: String,
    /// the exact value expected at that key
    value: String,
}

impl TagFilter {
    pub fn new(tag: &str, value: &str) -> TagFilter {
        TagFilter {
            tag: String::from(tag),
            value: String::from(value),
        }
    }

    pub fn highway(value: &str) -> TagFilter {
        TagFilter::new("highway", value)
    }
}

impl Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[\"{}\"=\"{}\"]",
            escape(&self.tag),
            escape(&self.value)
        )
    }
}

/// Overpass QL string literals are double-quoted with backslash escapes.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
