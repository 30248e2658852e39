//! Markup nodes handed to the host.
//!
//! Elements are `tola_vdom` elements of the [`SeoHead`] phase; serialization
//! goes through the vdom renderer (see `render`). A [`Tag`] wraps one element
//! with what the host needs but HTML never shows: the sibling key and where
//! the element has to end up.

mod family;
mod render;

pub use family::{Raw, SeoHead};
pub use render::{RenderOptions, to_html, to_html_with};

use tola_vdom::prelude::*;

/// Raw-phase element of the head family set.
pub type Element = tola_vdom::Element<Raw>;

/// Empty element with the given tag name.
pub fn element(tag: &str) -> Element {
    SeoHead::element(tag, Attrs::new())
}

/// Append trusted markup that is written out without escaping.
pub fn push_raw(element: &mut Element, html: &str) {
    element.push(Node::Text(Text::raw(html)));
}

/// Where the host has to put a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Slot {
    /// Wherever the caller writes it.
    #[default]
    Inline,
    /// Moved into the document `<head>` by the host.
    Head,
}

/// One rendered element plus its host metadata.
#[derive(Debug, Clone)]
pub struct Tag {
    /// Identity of the element among its siblings. Never written as HTML.
    pub key: Option<String>,
    pub slot: Slot,
    pub element: Element,
}

impl Tag {
    pub fn new(element: Element) -> Self {
        Self {
            key: None,
            slot: Slot::Inline,
            element,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Mark the tag for hoisting into `<head>`.
    pub fn hoisted(mut self) -> Self {
        self.slot = Slot::Head;
        self
    }

    pub fn is_head_placed(&self) -> bool {
        self.slot == Slot::Head
    }

    /// Replace the element, keeping key and slot.
    pub fn map(self, f: impl FnOnce(Element) -> Element) -> Self {
        Self {
            element: f(self.element),
            ..self
        }
    }
}

impl From<Element> for Tag {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}
