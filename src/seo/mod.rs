//! SEOmatic container rendering.
//!
//! # Module Structure
//!
//! ```text
//! seo/
//! ├── container   # ContainerKind, Container, SeomaticData
//! ├── normalize   # container -> keyed tag records
//! ├── category    # per-container render methods, Renderer
//! ├── placement   # head placement capability (Inline, Hoist, closures)
//! ├── value       # presence rules for JSON values
//! └── error       # SeoError
//! ```
//!
//! # Example
//!
//! ```ignore
//! let data: SeomaticData = serde_json::from_str(payload)?;
//! let page = Renderer::new().page(&data)?;
//! let head_html = markup::to_html(&page.head);
//! ```

mod category;
mod container;
mod error;
mod normalize;
mod placement;
pub mod value;

pub use category::{DEFAULT_BODY_SCRIPT_STYLE, JSON_LD_KEY, Page, Renderer};
pub use container::{AttributeSet, Container, ContainerKind, ContainerValue, SeomaticData};
pub use error::{Result, SeoError};
pub use normalize::{NormalizedRecord, normalize};
pub use placement::{HeadPlacement, Hoist, Inline};
