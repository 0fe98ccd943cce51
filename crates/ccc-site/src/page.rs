//! Rendered page view.

use std::fmt::Write;

use ccc_renderer::{
    HtmlBackend, RenderBackend, RenderedFootnote, RenderedParagraph, TextBackend, escape_html,
    write_footnotes, write_paragraphs,
};
use serde::Serialize;

use crate::breadcrumbs::BreadcrumbItem;
use crate::navigation::{NavControl, PageControls};

/// Everything needed to display one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub toc_id: String,
    /// Title from the table of contents (empty when absent).
    pub title: String,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub paragraphs: Vec<RenderedParagraph>,
    /// `None` when the page has no footnotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<Vec<RenderedFootnote>>,
    pub controls: PageControls,
}

impl PageView {
    /// Render the page as an HTML fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_breadcrumbs(&mut out);
        self.write_body::<HtmlBackend>(&mut out, r#"<div class="page-content">"#, "</div>\n");
        self.write_controls(&mut out);
        out
    }

    /// Render the page as plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            let _ = writeln!(out, "{}\n", self.title);
        }
        self.write_body::<TextBackend>(&mut out, "", "");
        out
    }

    fn write_body<B: RenderBackend>(&self, out: &mut String, open: &str, close: &str) {
        out.push_str(open);
        write_paragraphs::<B>(&self.paragraphs, out);
        out.push_str(close);
        write_footnotes::<B>(self.footnotes.as_deref(), out);
    }

    fn write_breadcrumbs(&self, out: &mut String) {
        if self.breadcrumbs.is_empty() {
            return;
        }

        out.push_str(r#"<nav class="breadcrumbs">"#);
        for (i, item) in self.breadcrumbs.iter().enumerate() {
            if i > 0 {
                out.push_str(" / ");
            }
            let title = escape_html(&item.title);
            match &item.path {
                Some(path) => {
                    let _ = write!(out, r#"<a href="{}">{title}</a>"#, escape_html(path));
                }
                None => {
                    let _ = write!(out, "<span>{title}</span>");
                }
            }
        }
        out.push_str("</nav>\n");
    }

    fn write_controls(&self, out: &mut String) {
        out.push_str(r#"<nav class="page-controls">"#);
        write_control(self.controls.prev.as_ref(), "prev", "‹", out);
        write_control(self.controls.next.as_ref(), "next", "›", out);
        out.push_str("</nav>\n");
    }
}

fn write_control(control: Option<&NavControl>, name: &str, glyph: &str, out: &mut String) {
    let Some(control) = control else {
        return;
    };
    let _ = match &control.path {
        Some(path) => write!(
            out,
            r#"<a class="page-control page-control-{name}" href="{}">{glyph}</a>"#,
            escape_html(path)
        ),
        None => write!(
            out,
            r#"<span class="page-control page-control-{name}">{glyph}</span>"#
        ),
    };
}
