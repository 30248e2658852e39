//! Render SEOmatic meta containers into HTML head and body markup.
//!
//! SEOmatic serializes a page's SEO tags as five JSON strings (JSON-LD,
//! links, scripts, meta tags, title). This crate parses them into a small
//! markup tree and serializes or injects that tree.
//!
//! ```ignore
//! use seomatic_head::{markup, seo::{Renderer, SeomaticData}};
//!
//! let data: SeomaticData = serde_json::from_str(payload)?;
//! let page = Renderer::new().page(&data)?;
//! println!("{}", markup::to_html(&page.head));
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod logger;
pub mod markup;
pub mod seo;
pub mod utils;
