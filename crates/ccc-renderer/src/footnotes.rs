//! Footnote ordering.

use std::collections::BTreeMap;

use ccc_store::Footnote;

use crate::node::RenderedFootnote;

/// Render the footnote block of a page.
///
/// Returns `None` for an empty mapping. Footnotes are ordered ascending by
/// `number`; equal numbers keep footnote id order.
#[must_use]
pub fn render_footnotes(footnotes: &BTreeMap<String, Footnote>) -> Option<Vec<RenderedFootnote>> {
    if footnotes.is_empty() {
        return None;
    }

    let mut ordered: Vec<&Footnote> = footnotes.values().collect();
    ordered.sort_by_key(|footnote| footnote.number);

    Some(
        ordered
            .into_iter()
            .map(|footnote| RenderedFootnote {
                number: footnote.number,
                refs: footnote.refs.iter().map(|r| r.text.clone()).collect(),
            })
            .collect(),
    )
}
