//! Output format abstraction.
//!
//! Backends supply format-specific primitives; [`write_paragraphs`] and
//! [`write_footnotes`] walk the node tree and dispatch to them.

use crate::node::{Inline, RenderedFootnote, RenderedParagraph, StyledContent, TextStyle};

/// Format-specific output primitives.
pub trait RenderBackend {
    fn paragraph_start(indent: bool, out: &mut String);

    fn paragraph_end(indent: bool, out: &mut String);

    fn line_break(out: &mut String);

    /// Superscript footnote reference.
    fn footnote_ref(number: u32, out: &mut String);

    /// Paragraph reference number token.
    fn ref_number(number: u32, out: &mut String);

    /// Styled text or link.
    fn styled(style: TextStyle, content: &StyledContent, out: &mut String);

    fn footnotes_start(out: &mut String);

    fn footnote(footnote: &RenderedFootnote, out: &mut String);

    fn footnotes_end(out: &mut String);
}

/// Write paragraphs in order.
pub fn write_paragraphs<B: RenderBackend>(paragraphs: &[RenderedParagraph], out: &mut String) {
    for paragraph in paragraphs {
        B::paragraph_start(paragraph.indent, out);
        for node in &paragraph.children {
            write_inline::<B>(node, out);
        }
        B::paragraph_end(paragraph.indent, out);
    }
}

/// Write the footnote block. `None` writes nothing, not even a container.
pub fn write_footnotes<B: RenderBackend>(footnotes: Option<&[RenderedFootnote]>, out: &mut String) {
    let Some(footnotes) = footnotes else {
        return;
    };

    B::footnotes_start(out);
    for footnote in footnotes {
        B::footnote(footnote, out);
    }
    B::footnotes_end(out);
}

fn write_inline<B: RenderBackend>(node: &Inline, out: &mut String) {
    match node {
        Inline::LineBreak => B::line_break(out),
        Inline::FootnoteRef { number } => B::footnote_ref(*number, out),
        Inline::RefNumber { number } => B::ref_number(*number, out),
        Inline::Styled { style, content } => B::styled(*style, content, out),
        Inline::Empty => {}
    }
}
