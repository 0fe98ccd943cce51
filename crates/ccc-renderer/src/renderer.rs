//! Paragraph tree renderer.

use ccc_store::{Paragraph, ParagraphElement, TextAttrs};

use crate::node::{Inline, RenderedParagraph, StyledContent, TextStyle};

/// Glyph shown for `ref-anchor` links.
pub const DEFAULT_ANCHOR_TEXT: &str = "⇒";

/// Turns stored paragraphs into a presentational node tree.
#[derive(Clone, Debug)]
pub struct PageRenderer {
    anchor_text: String,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor_text: DEFAULT_ANCHOR_TEXT.to_owned(),
        }
    }

    /// Set the text shown inside `ref-anchor` links.
    #[must_use]
    pub fn with_anchor_text(mut self, anchor_text: impl Into<String>) -> Self {
        self.anchor_text = anchor_text.into();
        self
    }

    /// Render paragraphs in stored order.
    #[must_use]
    pub fn render_paragraphs(&self, paragraphs: &[Paragraph]) -> Vec<RenderedParagraph> {
        paragraphs.iter().map(|p| self.render_paragraph(p)).collect()
    }

    #[must_use]
    pub fn render_paragraph(&self, paragraph: &Paragraph) -> RenderedParagraph {
        RenderedParagraph {
            indent: paragraph.attrs.indent,
            children: paragraph
                .elements
                .iter()
                .map(|e| self.render_element(e))
                .collect(),
        }
    }

    /// Render one element. Never fails; unknown elements render empty.
    #[must_use]
    pub fn render_element(&self, element: &ParagraphElement) -> Inline {
        match element {
            ParagraphElement::Spacer => Inline::LineBreak,
            ParagraphElement::Ref { number } => Inline::FootnoteRef { number: *number },
            ParagraphElement::RefAnchor { link, attrs } => styled(
                attrs.as_ref(),
                StyledContent::Link {
                    href: link.clone(),
                    text: self.anchor_text.clone(),
                },
            ),
            ParagraphElement::RefCcc { ref_number } => Inline::RefNumber {
                number: *ref_number,
            },
            ParagraphElement::Text { text, attrs } => styled(
                attrs.as_ref(),
                StyledContent::Text { text: text.clone() },
            ),
            ParagraphElement::Unknown => Inline::Empty,
        }
    }
}

/// Wrap content in the shared text styling. Absent attributes mean no styling.
#[must_use]
pub fn styled(attrs: Option<&TextAttrs>, content: StyledContent) -> Inline {
    let attrs = attrs.copied().unwrap_or_default();
    Inline::Styled {
        style: TextStyle {
            bold: attrs.bold,
            italic: attrs.italic,
        },
        content,
    }
}
