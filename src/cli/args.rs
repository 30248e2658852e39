//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render SEOmatic meta containers into HTML
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seomatic.toml)
    #[arg(short = 'C', long, global = true, default_value = "seomatic.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render containers to an HTML fragment
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Inject rendered markup into HTML documents
    #[command(visible_alias = "i")]
    Inject {
        #[command(flatten)]
        args: InjectArgs,
    },

    /// Print normalized link and meta records as JSON
    #[command(visible_alias = "q")]
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
}

/// Which half of the page to render.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Part {
    /// `<head>` markup only
    Head,
    /// `<body>` markup only
    Body,
    /// Head followed by body
    #[default]
    All,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// SEOmatic data file (JSON). Use `-` or omit to read stdin.
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Part of the page to render
    #[arg(short, long, value_enum, default_value_t = Part::All)]
    pub part: Part,

    /// Tag head elements for host-managed placement
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub native: Option<bool>,

    /// One tag per line
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Inject command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InjectArgs {
    /// HTML documents to inject into
    #[arg(value_name = "HTML", required = true, value_hint = clap::ValueHint::FilePath)]
    pub documents: Vec<PathBuf>,

    /// SEOmatic data file (JSON)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Output directory (documents are rewritten in place when unset)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// One tag per line
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,
}

/// Inspect command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// SEOmatic data file (JSON). Use `-` or omit to read stdin.
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Cli {
    /// Output formatting requested on the command line, if any.
    pub fn pretty(&self) -> Option<bool> {
        match &self.command {
            Commands::Render { args } => args.pretty,
            Commands::Inject { args } => args.pretty,
            Commands::Inspect { .. } => None,
        }
    }
}
