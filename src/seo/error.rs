//! Rendering error types.

use thiserror::Error;

use super::ContainerKind;

/// Errors raised while rendering SEOmatic containers.
///
/// Absent containers and shape mismatches are not errors; they render
/// nothing. Only input that cannot be read at all ends up here.
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("malformed JSON in `{container}`")]
    Json {
        container: ContainerKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("document has no `</{0}>` to insert before")]
    MissingAnchor(&'static str),
}

impl SeoError {
    pub(crate) fn json(container: ContainerKind) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Json { container, source }
    }
}

pub type Result<T, E = SeoError> = std::result::Result<T, E>;
