//! Best-effort parsing of one struct-initializer line.

use super::VariableRecord;

/// Why a line produced no entry. Candidate filtering and name extraction are
/// the only gates; field extraction after a good name never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Line was empty.
    Empty,
    /// No `{` on the line, so it cannot be an initializer row.
    NoBrace,
    /// Line contains `struct`: a type declaration, not a data row.
    StructDecl,
    /// First field had no double-quoted variable name.
    NoQuotedName,
}

/// A successfully parsed line: the variable name and its (possibly partial)
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEntry {
    pub name: String,
    pub record: VariableRecord,
}

/// Parses one line of the defaults table.
///
/// A line is a candidate only if it is non-empty, contains `{`, and does not
/// contain `struct`. Tabs are stripped, the line is split on commas, and
/// each field is trimmed. The variable name is the first double-quoted
/// substring of the first field; without one the whole line is skipped, so
/// values from a malformed line are never attached to a previously parsed
/// variable.
pub fn parse_line(line: &str) -> Result<LineEntry, SkipReason> {
    if line.is_empty() {
        return Err(SkipReason::Empty);
    }
    if !line.contains('{') {
        return Err(SkipReason::NoBrace);
    }
    if line.contains("struct") {
        return Err(SkipReason::StructDecl);
    }

    let cleaned = line.replace('\t', "");
    let fields: Vec<&str> = cleaned.split(',').map(str::trim).collect();

    let name = match quoted(fields[0]) {
        Some(n) => n.to_string(),
        None => return Err(SkipReason::NoQuotedName),
    };

    let default = fields.get(1).map(|f| default_value(f));

    // The description lives in a `/* ... */` comment at the end of the row.
    // A trailing comma after the closing brace leaves an empty final field,
    // so the last non-empty field is the one to inspect.
    let description = fields
        .iter()
        .rev()
        .find(|f| !f.is_empty())
        .and_then(|f| comment(f))
        .unwrap_or_default();

    Ok(LineEntry {
        name,
        record: VariableRecord { default, description },
    })
}

/// First double-quoted substring of `field` with at least one character
/// inside the quotes.
fn quoted(field: &str) -> Option<&str> {
    let start = field.find('"')?;
    let rest = &field[start + 1..];
    let end = rest.find('"')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Default-value field with quoting stripped. A close brace after the value
/// is part of the initializer, not the value, so it is dropped too.
fn default_value(field: &str) -> String {
    let stripped = field.replace('"', "");
    let trimmed = stripped.trim();
    match trimmed.strip_suffix('}') {
        Some(rest) => rest.trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Interior of the first `/* ... */` in `field`, whitespace-trimmed.
fn comment(field: &str) -> Option<String> {
    let start = field.find("/*")?;
    let rest = &field[start + 2..];
    let end = rest.find("*/")?;
    Some(rest[..end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reasons() {
        assert_eq!(parse_line("").unwrap_err(), SkipReason::Empty);
        assert_eq!(parse_line("int x = 0;").unwrap_err(), SkipReason::NoBrace);
        assert_eq!(
            parse_line("struct nvram_tuple router_defaults[] = {").unwrap_err(),
            SkipReason::StructDecl
        );
        assert_eq!(
            parse_line("{0, 0, 0},").unwrap_err(),
            SkipReason::NoQuotedName
        );
    }

    #[test]
    fn quoted_finds_first_nonempty_substring() {
        assert_eq!(quoted("{ \"wan_proto\""), Some("wan_proto"));
        assert_eq!(quoted("no quotes"), None);
        assert_eq!(quoted("{ \"\""), None);
    }

    #[test]
    fn default_value_strips_quotes_and_close_brace() {
        assert_eq!(default_value("\"dhcp\""), "dhcp");
        assert_eq!(default_value("\"192.168.1.1\" }"), "192.168.1.1");
        assert_eq!(default_value("\"baz\"}"), "baz");
        assert_eq!(default_value("0"), "0");
        assert_eq!(default_value(""), "");
    }

    #[test]
    fn comment_extracts_trimmed_interior() {
        assert_eq!(comment("/* WAN type */").as_deref(), Some("WAN type"));
        assert_eq!(comment("/*packed*/}").as_deref(), Some("packed"));
        assert_eq!(comment("/**/").as_deref(), Some(""));
        assert_eq!(comment("no comment"), None);
    }

    #[test]
    fn line_with_extra_fields_keeps_second_as_default() {
        let entry = parse_line("{ \"time_zone\", \"EST5EDT\", 0 },\t/* Time zone */").unwrap();
        assert_eq!(entry.name, "time_zone");
        assert_eq!(entry.record.default.as_deref(), Some("EST5EDT"));
        assert_eq!(entry.record.description, "Time zone");
    }

    #[test]
    fn empty_second_field_yields_empty_default() {
        let entry = parse_line("{\"X\"},").unwrap();
        assert_eq!(entry.record.default.as_deref(), Some(""));
    }
}
