//! Presentational node tree.

/// Text styling applied to styled inline content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    /// True if no styling applies.
    #[must_use]
    pub fn is_plain(self) -> bool {
        !self.bold && !self.italic
    }
}

/// Content wrapped by the text styling decorator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StyledContent {
    Text { text: String },
    Link { href: String, text: String },
}

/// Inline node of a rendered paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Inline {
    LineBreak,
    /// Superscript footnote reference.
    FootnoteRef { number: u32 },
    /// Paragraph reference number token, followed by a space.
    RefNumber { number: u32 },
    Styled {
        style: TextStyle,
        content: StyledContent,
    },
    /// Renders nothing.
    Empty,
}

/// Rendered paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedParagraph {
    pub indent: bool,
    pub children: Vec<Inline>,
}

/// Rendered footnote.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedFootnote {
    pub number: u32,
    pub refs: Vec<String>,
}

impl RenderedFootnote {
    /// Display line: `"<number>. <ref1>, <ref2>, ..."`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.refs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footnote_label_joins_refs() {
        let footnote = RenderedFootnote {
            number: 1,
            refs: vec!["r2".to_owned(), "r3".to_owned()],
        };
        assert_eq!(footnote.label(), "1. r2, r3");
    }

    #[test]
    fn test_footnote_label_without_refs() {
        let footnote = RenderedFootnote {
            number: 4,
            refs: Vec::new(),
        };
        assert_eq!(footnote.label(), "4. ");
    }

    #[test]
    fn test_text_style_plain() {
        assert!(TextStyle::default().is_plain());
        assert!(
            !TextStyle {
                bold: false,
                italic: true
            }
            .is_plain()
        );
    }
}
