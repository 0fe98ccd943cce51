//! Short link normalization.

/// Marker prefixed to the identifying segment of a short link.
const SHORT_LINK_MARKER: &str = "__";

/// Extensions trailing the identifying segment, matched ASCII case-insensitively.
const SHORT_LINK_EXTENSIONS: [&str; 2] = [".html", ".htm"];

/// Strip short link decoration, returning the bare slug.
///
/// Drops any query or fragment, keeps the last non-empty path segment, then
/// removes the `__` marker and a trailing `.htm`/`.html` extension. Bare and
/// empty inputs come back unchanged.
///
/// # Examples
///
/// ```
/// use ccc_store::strip_url_short_link;
///
/// assert_eq!(strip_url_short_link("https://example.org/archive/__P1.HTM"), "P1");
/// assert_eq!(strip_url_short_link("__P1A.HTM#12"), "P1A");
/// assert_eq!(strip_url_short_link("P1"), "P1");
/// assert_eq!(strip_url_short_link(""), "");
/// ```
pub fn strip_url_short_link(link: &str) -> String {
    let link = link.trim();
    let end = link.find(['?', '#']).unwrap_or(link.len());

    let segment = link[..end]
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or_default();
    let segment = segment.strip_prefix(SHORT_LINK_MARKER).unwrap_or(segment);

    strip_extension(segment).to_owned()
}

fn strip_extension(segment: &str) -> &str {
    for ext in SHORT_LINK_EXTENSIONS {
        let Some(split) = segment.len().checked_sub(ext.len()) else {
            continue;
        };
        if split == 0 || !segment.is_char_boundary(split) {
            continue;
        }
        let (stem, tail) = segment.split_at(split);
        if tail.eq_ignore_ascii_case(ext) {
            return stem;
        }
    }
    segment
}
