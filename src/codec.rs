//! # Variable Declaration Codec
//!
//! Parses, validates and serializes the flat `--name: value;` declaration
//! text format used for raw theme editing.
//!
//! Parsing and validation are deliberately two separate passes:
//!
//! - [parse] is best-effort and never fails. It extracts a working [Theme]
//!   even from slightly malformed text, which is what the live editing flow
//!   needs between keystrokes.
//! - [validate] is strict and produces one ordered error message per
//!   violation, which is what the user-facing feedback flow needs.
//!
//! Unifying the two would silently change user-visible validation behavior,
//! so both are kept as independent entry points.

use std::fmt::Write;

use crate::catalog::Theme;

/// The two-character sentinel every variable name begins with.
pub const VARIABLE_PREFIX: &str = "--";

/// Outcome of a strict [validate] pass over declaration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when no violations were found.
    pub valid: bool,
    /// One message per violation, in input order with 1-based line numbers.
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Returns true for an identifier character allowed after the `--` prefix.
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Returns true when `name` matches the variable name grammar:
/// the `--` prefix followed by one or more identifier characters.
pub fn is_valid_variable_name(name: &str) -> bool {
    match name.strip_prefix(VARIABLE_PREFIX) {
        Some(rest) => !rest.is_empty() && rest.chars().all(is_identifier_char),
        None => false,
    }
}

/// Strips a single trailing semicolon and surrounding whitespace from a value.
fn clean_value(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_suffix(';').map_or(raw, str::trim)
}

/// Best-effort extraction of a [Theme] from declaration text.
///
/// Blank lines are ignored. A non-blank line is kept only when it matches
/// `--<name>: <value>;?` with a grammatically valid name and a non-empty
/// value; anything else is silently skipped. This function never fails —
/// strict feedback is [validate]'s job.
pub fn parse(text: &str) -> Theme {
    let mut theme = Theme::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with(VARIABLE_PREFIX) {
            continue;
        }
        let Some(colon) = line.find(':') else {
            continue;
        };
        let name = line[..colon].trim();
        let value = clean_value(&line[colon + 1..]);
        if !is_valid_variable_name(name) || value.is_empty() {
            continue;
        }
        theme.set(name, value);
    }
    theme
}

/// Strict per-line validation of declaration text.
///
/// For each non-blank line, in order, this reports: a missing `--` prefix, a
/// missing colon separator, more than one colon, an empty variable name and
/// an empty value. A single line can produce more than one error.
pub fn validate(text: &str) -> ValidationReport {
    let mut errors = Vec::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with(VARIABLE_PREFIX) {
            errors.push(format!(
                "Line {line_no}: variable declarations must start with '--'"
            ));
            continue;
        }
        if !line.contains(':') {
            errors.push(format!("Line {line_no}: missing colon separator"));
            continue;
        }
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            errors.push(format!("Line {line_no}: invalid variable declaration"));
            continue;
        }
        let name = parts[0].trim();
        let value = clean_value(parts[1]);
        if name
            .strip_prefix(VARIABLE_PREFIX)
            .is_none_or(str::is_empty)
        {
            errors.push(format!("Line {line_no}: variable name is required"));
        }
        if value.is_empty() {
            errors.push(format!("Line {line_no}: variable value is required"));
        }
    }
    ValidationReport::from_errors(errors)
}

/// Renders a [Theme] back into declaration text.
///
/// Each entry becomes one `name: value;` line. Output order is the theme's
/// insertion order, so `parse(serialize(t)) == t` holds for any theme whose
/// values contain no raw newline and no colon.
pub fn serialize(theme: &Theme) -> String {
    let mut out = String::new();
    for (name, value) in theme.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{name}: {value};");
    }
    out
}
