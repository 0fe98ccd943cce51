//! HTML backend.
//!
//! Produces HTML fragments using class names for presentation; styling is
//! left to the page stylesheet.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::escape::escape_html;
use crate::node::{RenderedFootnote, StyledContent, TextStyle};

/// HTML render backend.
///
/// Produces:
/// - `<p>` per paragraph, `class="paragraph-indented"` when indented
/// - `<span class="element-text ...">` around styled text and links
/// - `<sup>` for footnote references
/// - `<div class="footnotes">` holding one `<p>` per footnote
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn paragraph_start(indent: bool, out: &mut String) {
        if indent {
            out.push_str(r#"<p class="paragraph-indented">"#);
        } else {
            out.push_str("<p>");
        }
    }

    fn paragraph_end(_indent: bool, out: &mut String) {
        out.push_str("</p>\n");
    }

    fn line_break(out: &mut String) {
        out.push_str("<br>");
    }

    fn footnote_ref(number: u32, out: &mut String) {
        let _ = write!(out, "<sup>{number}</sup>");
    }

    fn ref_number(number: u32, out: &mut String) {
        let _ = write!(out, "{number} ");
    }

    fn styled(style: TextStyle, content: &StyledContent, out: &mut String) {
        out.push_str(r#"<span class="element-text"#);
        if style.bold {
            out.push_str(" element-text-bold");
        }
        if style.italic {
            out.push_str(" element-text-italic");
        }
        out.push_str(r#"">"#);

        match content {
            StyledContent::Text { text } => out.push_str(&escape_html(text)),
            StyledContent::Link { href, text } if is_safe_href(href) => {
                let _ = write!(
                    out,
                    r#"<a href="{}">{}</a>"#,
                    escape_html(href),
                    escape_html(text)
                );
            }
            StyledContent::Link { text, .. } => out.push_str(&escape_html(text)),
        }

        out.push_str("</span>");
    }

    fn footnotes_start(out: &mut String) {
        out.push_str(r#"<div class="footnotes">"#);
    }

    fn footnote(footnote: &RenderedFootnote, out: &mut String) {
        let _ = write!(out, "<p>{}</p>", escape_html(&footnote.label()));
    }

    fn footnotes_end(out: &mut String) {
        out.push_str("</div>\n");
    }
}

/// Whether a link target may be emitted as `href`.
///
/// Relative links, fragments and `http(s)`/`mailto` URLs pass; any other
/// scheme (e.g. `javascript:`) does not.
fn is_safe_href(href: &str) -> bool {
    let href = href.trim_start();
    let Some(end) = href.find([':', '/', '?', '#']) else {
        return true;
    };
    if !href[end..].starts_with(':') {
        return true;
    }
    let scheme = &href[..end];
    ["http", "https", "mailto"]
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}
