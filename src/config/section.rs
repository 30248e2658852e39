//! `[render]` and `[inject]` sections.
//!
//! # Example
//!
//! ```toml
//! [render]
//! pretty = false                                 # One tag per line
//! native = false                                 # Tag head elements for hoisting
//! body_script_style = "display:none !important"  # Style of body script wrappers
//!
//! [inject]
//! out_dir = "dist"                               # Rewrite in place when unset
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::seo::DEFAULT_BODY_SCRIPT_STYLE;

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Put each tag on its own line.
    pub pretty: bool,

    /// Framework-native head placement.
    /// - `false` (default): head elements are returned as plain nodes
    /// - `true`: head elements are tagged for the host to hoist
    pub native: bool,

    /// Inline style of the hidden `<div>` wrapping each `bodyScript`.
    pub body_script_style: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            native: false,
            body_script_style: DEFAULT_BODY_SCRIPT_STYLE.to_string(),
        }
    }
}

/// Document injection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InjectConfig {
    /// Output directory, relative to the config file.
    pub out_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_render_config() {
        let config = test_parse_config(
            "[render]\npretty = true\nnative = true\nbody_script_style = \"display:none\"",
        );
        assert!(config.render.pretty);
        assert!(config.render.native);
        assert_eq!(config.render.body_script_style, "display:none");
    }

    #[test]
    fn test_render_config_defaults() {
        let config = test_parse_config("");
        assert!(!config.render.pretty);
        assert!(!config.render.native);
        assert_eq!(config.render.body_script_style, "display:none !important");
        assert_eq!(config.inject.out_dir, None);
    }

    #[test]
    fn test_inject_config() {
        let config = test_parse_config("[inject]\nout_dir = \"dist\"");
        assert_eq!(config.inject.out_dir, Some(PathBuf::from("dist")));
    }
}
