//! `inspect` command: show normalized tag records.
//!
//! Prints what the link and meta containers flatten to, keyed by container
//! name, so key collisions and skipped entries can be checked without
//! reading rendered HTML.

use anyhow::Result;
use serde_json::{Map, Value};

use super::args::InspectArgs;
use super::common::{read_data, write_output};
use crate::log;
use crate::seo::{Container, ContainerKind, SeomaticData, normalize};
use crate::utils::plural_count;

/// Execute inspect command
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let data = read_data(args.input.as_deref())?;
    let report = inspect(&data)?;

    let records: usize = report
        .values()
        .filter_map(Value::as_array)
        .map(Vec::len)
        .sum();
    log!("inspect"; "found {}", plural_count(records, "record"));

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    write_output(None, &formatted)
}

/// Normalized records of every attribute container, keyed by field name.
pub fn inspect(data: &SeomaticData) -> Result<Map<String, Value>> {
    let mut report = Map::new();
    for kind in [ContainerKind::Link, ContainerKind::Tag] {
        let records = match data.raw(kind) {
            Some(raw) => normalize(&Container::parse(kind, raw)?),
            None => Vec::new(),
        };
        report.insert(kind.field_name().to_string(), serde_json::to_value(records)?);
    }
    Ok(report)
}
