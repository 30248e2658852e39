//! Command-line interface module.

mod args;
pub mod common;
pub mod inject;
pub mod inspect;
pub mod render;

pub use args::{Cli, Commands, InjectArgs, InspectArgs, Part, RenderArgs};
