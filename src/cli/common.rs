//! Shared helpers for CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::seo::{ContainerKind, SeomaticData};

/// How deep to look for the containers inside a response envelope.
const MAX_ENVELOPE_DEPTH: usize = 4;

/// Read SEOmatic data from a file, or stdin for `None` / `-`.
pub fn read_data(input: Option<&Path>) -> Result<SeomaticData> {
    let (content, source) = match input {
        Some(path) if path != Path::new("-") => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            (content, path.display().to_string())
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            (content, "stdin".to_string())
        }
    };

    parse_data(&content).with_context(|| format!("invalid SEOmatic data in {source}"))
}

/// Parse SEOmatic data, unwrapping API envelopes.
///
/// Accepts the bare container object as well as GraphQL responses such as
/// `{"data": {"seomatic": {...}}}` or `{"data": {"entry": {"seomatic": {...}}}}`.
pub fn parse_data(content: &str) -> Result<SeomaticData> {
    let value: Value = serde_json::from_str(content)?;
    let Some(found) = find_containers(&value, 0) else {
        bail!("no SEOmatic containers found");
    };
    Ok(serde_json::from_value(found.clone())?)
}

fn find_containers(value: &Value, depth: usize) -> Option<&Value> {
    let object = value.as_object()?;
    if ContainerKind::ALL
        .iter()
        .any(|kind| object.contains_key(kind.field_name()))
    {
        return Some(value);
    }
    if depth >= MAX_ENVELOPE_DEPTH {
        return None;
    }
    object
        .values()
        .find_map(|child| find_containers(child, depth + 1))
}

/// Write output to a file, or stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{content}\n"))
                .with_context(|| format!("failed to write `{}`", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
