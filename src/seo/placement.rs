//! Head placement.
//!
//! Every head tag passes through a [`HeadPlacement`] before it is returned.
//! The default, [`Inline`], hands tags back untouched for callers that
//! already render inside `<head>`. [`Hoist`] moves tags to [`Slot::Head`] so
//! a host (see `document::inject`) puts them into the document head. Any
//! `Fn(Tag) -> Tag` works as a custom wrapper.
//!
//! [`Slot::Head`]: crate::markup::Slot::Head

use crate::markup::Tag;

/// Decides how a head tag is signaled to the host.
pub trait HeadPlacement {
    fn place(&self, tag: Tag) -> Tag;
}

/// Identity placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inline;

impl HeadPlacement for Inline {
    fn place(&self, tag: Tag) -> Tag {
        tag
    }
}

/// Host-managed placement: the tag is marked for hoisting into `<head>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hoist;

impl HeadPlacement for Hoist {
    fn place(&self, tag: Tag) -> Tag {
        tag.hoisted()
    }
}

impl<F> HeadPlacement for F
where
    F: Fn(Tag) -> Tag,
{
    fn place(&self, tag: Tag) -> Tag {
        self(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Slot, element};

    #[test]
    fn test_inline_is_identity() {
        let tag = Inline.place(Tag::new(element("title")).with_key("title"));
        assert_eq!(tag.slot, Slot::Inline);
        assert_eq!(tag.key.as_deref(), Some("title"));
        assert_eq!(tag.element.tag, "title");
    }

    #[test]
    fn test_hoist_marks_head() {
        let tag = Hoist.place(Tag::new(element("title")));
        assert_eq!(tag.slot, Slot::Head);
        assert_eq!(tag.element.tag, "title");
    }

    #[test]
    fn test_closure_wrapper() {
        let wrap = |tag: Tag| {
            tag.map(|el| {
                let mut outer = element("template");
                outer.push_elem(el);
                outer
            })
        };
        let tag = wrap.place(Tag::new(element("meta")));

        assert_eq!(tag.element.tag, "template");
        assert_eq!(tag.element.children.len(), 1);
    }
}
