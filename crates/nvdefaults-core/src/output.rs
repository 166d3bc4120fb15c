//! Serializes the variable map to the output JSON document.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::defaults::VariableMap;

/// Writes `vars` as pretty-printed JSON to `path`, replacing any existing
/// file at that path without confirmation. Filesystem failures are fatal to
/// the caller.
pub fn write_defaults(vars: &VariableMap, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(vars).context("serialize defaults to JSON")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("wrote {} variables to {}", vars.len(), path.display());
    Ok(())
}
