//! Extraction of NVRAM default variables from the firmware source table.
//!
//! The upstream file is a C array of struct initializers of the form
//! `{ "name", "value", 0 },\t/* description */`. Parsing is line-oriented
//! and best-effort: irregular lines are skipped with a reason, never fatal.

mod parse;

use serde::Serialize;
use std::collections::BTreeMap;

pub use parse::{parse_line, LineEntry, SkipReason};

/// One extracted variable: its default literal and a description taken from
/// the trailing comment, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    /// Default value with quoting stripped. Absent when the source line had
    /// no second field; the key is then omitted from the output document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Trailing `/* ... */` comment content, or empty when none was present.
    pub description: String,
}

/// Map from variable name to record.
pub type VariableMap = BTreeMap<String, VariableRecord>;

/// Scans the whole document line by line and accumulates a record per
/// variable. A name seen again on a later line overwrites the earlier
/// record, with no warning.
///
/// Per-line failures only drop that line. The caller cannot tell an empty
/// upstream file from one where every line was irregular except by the size
/// of the returned map; skip counts go to the debug log only.
pub fn parse_defaults(text: &str) -> VariableMap {
    let mut vars = VariableMap::new();
    let mut candidates = 0usize;
    let mut unnamed = 0usize;

    for line in text.split('\n') {
        match parse_line(line) {
            Ok(entry) => {
                candidates += 1;
                vars.insert(entry.name, entry.record);
            }
            Err(SkipReason::NoQuotedName) => {
                candidates += 1;
                unnamed += 1;
            }
            Err(_) => {}
        }
    }

    tracing::debug!(
        "extracted {} variables from {} candidate lines ({} without a quoted name)",
        vars.len(),
        candidates,
        unnamed
    );
    vars
}
