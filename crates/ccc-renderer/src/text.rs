//! Plain text backend for terminal output.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::node::{RenderedFootnote, StyledContent, TextStyle};

const INDENT: &str = "    ";

/// Plain text render backend.
///
/// Paragraphs are separated by a blank line, indented paragraphs start with
/// four spaces and footnote references appear as `[n]`. Styling is dropped.
pub struct TextBackend;

impl RenderBackend for TextBackend {
    fn paragraph_start(indent: bool, out: &mut String) {
        if indent {
            out.push_str(INDENT);
        }
    }

    fn paragraph_end(_indent: bool, out: &mut String) {
        out.push_str("\n\n");
    }

    fn line_break(out: &mut String) {
        out.push('\n');
    }

    fn footnote_ref(number: u32, out: &mut String) {
        let _ = write!(out, "[{number}]");
    }

    fn ref_number(number: u32, out: &mut String) {
        let _ = write!(out, "{number} ");
    }

    fn styled(_style: TextStyle, content: &StyledContent, out: &mut String) {
        match content {
            StyledContent::Text { text } => out.push_str(text),
            StyledContent::Link { href, text } => {
                let _ = write!(out, "{text} <{href}>");
            }
        }
    }

    fn footnotes_start(out: &mut String) {
        out.push_str("---\n");
    }

    fn footnote(footnote: &RenderedFootnote, out: &mut String) {
        out.push_str(&footnote.label());
        out.push('\n');
    }

    fn footnotes_end(_out: &mut String) {}
}
