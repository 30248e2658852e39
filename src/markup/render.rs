//! HTML serialization through the vdom renderer.
//!
//! Each tag is rendered as its own document (Raw → Indexed → Processed →
//! HTML) so fragments come out without a wrapper element.

use tola_vdom::prelude::*;

use super::{Element, SeoHead, Tag};

/// Serialization options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Put each top-level tag on its own line.
    pub pretty: bool,
}

/// Serialize tags to a compact HTML string.
pub fn to_html(tags: &[Tag]) -> String {
    to_html_with(tags, RenderOptions::default())
}

/// Serialize tags to HTML.
pub fn to_html_with<'a>(tags: impl IntoIterator<Item = &'a Tag>, options: RenderOptions) -> String {
    let separator = if options.pretty { "\n" } else { "" };
    tags.into_iter()
        .map(|tag| render_element(&tag.element))
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_element(element: &Element) -> String {
    let doc = Document::new(element.clone());
    let processed = Pipeline::new(doc)
        .pipe(SeoHead::indexer())
        .pipe(SeoHead::processor())
        .into_inner();

    let render_config = RenderConfig::new(false, false);
    let bytes = render_document_bytes(&processed, &render_config);
    String::from_utf8_lossy(&bytes).into_owned()
}
