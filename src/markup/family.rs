//! VDOM family set for head markup.
//!
//! Head output only needs the built-in link family (`<link href>`); the
//! `#[families]` macro generates the phase types and the `SeoHead::element`,
//! `SeoHead::indexer` and `SeoHead::processor` entry points.

#![allow(dead_code)]

use tola_vdom::families::LinkFamily;
use tola_vdom::vdom::families;

/// Phase set for SEOmatic head markup.
#[families]
pub struct SeoHead {
    link: LinkFamily,
}

/// Raw phase type alias for convenience
pub type Raw = SeoHead::Raw;
