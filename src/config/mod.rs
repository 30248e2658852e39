//! Configuration management for `seomatic.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [render] and [inject]
//! ├── error      # ConfigError
//! ├── util       # config file discovery
//! └── mod.rs     # SeomaticConfig (this file)
//! ```
//!
//! The config file is optional. It is searched upward from the current
//! directory; when none is found every setting keeps its default. CLI flags
//! override file values.

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{InjectConfig, RenderConfig};

use util::find_config_file;

use crate::cli::{Cli, Commands};
use crate::log;
use crate::markup::RenderOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seomatic.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeomaticConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Document injection settings
    #[serde(default)]
    pub inject: InjectConfig,
}

impl SeomaticConfig {
    /// Load configuration for a CLI invocation.
    pub fn load(cli: &Cli) -> Result<Self> {
        // Before discovery, so its debug output honors --verbose
        crate::logger::set_verbose(cli.verbose);

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-line overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.render.pretty, cli.pretty().as_ref());
        match &cli.command {
            Commands::Render { args } => {
                Self::update_option(&mut self.render.native, args.native.as_ref());
            }
            // --out-dir resolves against cwd, so it is applied by the command
            Commands::Inject { .. } | Commands::Inspect { .. } => {}
        }
    }

    /// Update a config value if the CLI provided one.
    fn update_option<T: Clone>(target: &mut T, value: Option<&T>) {
        if let Some(v) = value {
            *target = v.clone();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.render.body_script_style.contains('"') {
            return Err(ConfigError::Validation(
                "render.body_script_style must not contain `\"`".to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Serialization options for rendered markup.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            pretty: self.render.pretty,
        }
    }

    /// Resolved injection output directory, if configured.
    ///
    /// Values from the config file resolve against its directory.
    pub fn out_dir(&self) -> Option<PathBuf> {
        self.inject.out_dir.as_ref().map(|dir| self.root.join(dir))
    }
}

/// Parse a config string for tests, panicking on error.
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> SeomaticConfig {
    SeomaticConfig::from_str(content).unwrap()
}
