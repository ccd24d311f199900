use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use backform_types::DerivationRecord;

/// Read corpus matches exported as a JSON array or as JSON lines.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<DerivationRecord>> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_records(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_records(raw: &str) -> Result<Vec<DerivationRecord>> {
    if raw.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", idx + 1))
        })
        .collect()
}
