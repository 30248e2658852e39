//! Document injection (rendered page → HTML document).
//!
//! Host side of head placement: splices a rendered [`Page`] into an existing
//! HTML document. Head output lands right before the first `</head>`, body
//! output right before the last `</body>`. Tags in [`Slot::Head`] go to the
//! head no matter which list they came from.
//!
//! The document itself is never reparsed; everything outside the two
//! insertion points is kept byte for byte.
//!
//! [`Slot::Head`]: crate::markup::Slot::Head

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{RenderOptions, Tag, to_html_with};
use crate::seo::{Page, Result, SeoError};

static HEAD_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)</head\s*>").unwrap());
static BODY_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)</body\s*>").unwrap());

/// A page serialized once, ready to be spliced into any number of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub head: String,
    pub body: String,
}

impl RenderedPage {
    /// Serialize a page, routing head-placed body tags to the head.
    pub fn render(page: &Page, options: RenderOptions) -> Self {
        let (head, body) = route(page);
        Self {
            head: render_block(&head, options),
            body: render_block(&body, options),
        }
    }
}

/// Insert a page's head and body markup into `html`.
///
/// A document with nothing to insert comes back unchanged. Missing closing
/// tags are an error only when there is output for them.
pub fn inject(html: &str, page: &Page, options: RenderOptions) -> Result<String> {
    inject_rendered(html, &RenderedPage::render(page, options))
}

/// [`inject`] with a page that is already serialized.
pub fn inject_rendered(html: &str, page: &RenderedPage) -> Result<String> {
    let mut inserts: Vec<(usize, &str)> = Vec::with_capacity(2);
    if !page.head.is_empty() {
        let at = HEAD_CLOSE
            .find(html)
            .ok_or(SeoError::MissingAnchor("head"))?
            .start();
        inserts.push((at, page.head.as_str()));
    }
    if !page.body.is_empty() {
        let at = BODY_CLOSE
            .find_iter(html)
            .last()
            .ok_or(SeoError::MissingAnchor("body"))?
            .start();
        inserts.push((at, page.body.as_str()));
    }

    if inserts.is_empty() {
        return Ok(html.to_string());
    }
    inserts.sort_by_key(|(at, _)| *at);

    let extra: usize = inserts.iter().map(|(_, s)| s.len()).sum();
    let mut out = String::with_capacity(html.len() + extra);
    let mut cursor = 0;
    for (at, markup) in inserts {
        out.push_str(&html[cursor..at]);
        out.push_str(markup);
        cursor = at;
    }
    out.push_str(&html[cursor..]);
    Ok(out)
}

/// Split a page into head-bound and body-bound tags.
fn route(page: &Page) -> (Vec<&Tag>, Vec<&Tag>) {
    let mut head: Vec<&Tag> = page.head.iter().collect();
    let mut body = Vec::with_capacity(page.body.len());
    for tag in &page.body {
        if tag.is_head_placed() {
            head.push(tag);
        } else {
            body.push(tag);
        }
    }
    (head, body)
}

fn render_block(tags: &[&Tag], options: RenderOptions) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let html = to_html_with(tags.iter().copied(), options);
    if options.pretty { format!("{html}\n") } else { html }
}
