//! Paragraph tree and footnote rendering with pluggable backends.
//!
//! Rendering happens in two steps:
//! - [`PageRenderer`] turns stored paragraphs into a presentational node tree
//!   ([`RenderedParagraph`], [`Inline`]) and [`render_footnotes`] orders
//!   footnotes into [`RenderedFootnote`]s.
//! - A [`RenderBackend`] serializes the tree. [`HtmlBackend`] produces HTML
//!   fragments, [`TextBackend`] produces plain text.
//!
//! # Example
//!
//! ```
//! use ccc_renderer::{HtmlBackend, PageRenderer, write_paragraphs};
//! use ccc_store::{Paragraph, ParagraphAttrs, ParagraphElement, TextAttrs};
//!
//! let paragraph = Paragraph {
//!     attrs: ParagraphAttrs { indent: true },
//!     elements: vec![ParagraphElement::Text {
//!         text: "Hi".to_owned(),
//!         attrs: Some(TextAttrs { bold: true, italic: false }),
//!     }],
//! };
//!
//! let rendered = PageRenderer::new().render_paragraphs(&[paragraph]);
//! let mut html = String::new();
//! write_paragraphs::<HtmlBackend>(&rendered, &mut html);
//!
//! assert_eq!(
//!     html,
//!     "<p class=\"paragraph-indented\"><span class=\"element-text element-text-bold\">Hi</span></p>\n"
//! );
//! ```

mod backend;
mod escape;
mod footnotes;
mod html;
mod node;
mod renderer;
mod text;

pub use backend::{RenderBackend, write_footnotes, write_paragraphs};
pub use escape::escape_html;
pub use footnotes::render_footnotes;
pub use html::HtmlBackend;
pub use node::{Inline, RenderedFootnote, RenderedParagraph, StyledContent, TextStyle};
pub use renderer::{DEFAULT_ANCHOR_TEXT, PageRenderer, styled};
pub use text::TextBackend;
