//! Quoted string helpers (`qdstring` in RFC 4512).

use crate::error::{ValidationError, ValidationResult};

/// Escape a value for use between single quotes.
///
/// Backslash and apostrophe are written as `\5C` and `\27`.
pub fn escape_qdstring(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\5C"),
            '\'' => out.push_str("\\27"),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_qdstring`]. Unknown escapes are kept verbatim.
pub fn unescape_qdstring(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let code = tail.get(..2).map(str::to_ascii_uppercase);
        match code.as_deref() {
            Some("27") => {
                out.push('\'');
                rest = &tail[2..];
            }
            Some("5C") => {
                out.push('\\');
                rest = &tail[2..];
            }
            _ => {
                out.push('\\');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// A description must be non-blank when set and free of control characters.
pub fn validate_description(desc: &str) -> ValidationResult<()> {
    if desc.trim().is_empty() {
        return Err(ValidationError::InvalidDescription {
            reason: "description is blank".to_string(),
        });
    }
    if desc.chars().any(char::is_control) {
        return Err(ValidationError::InvalidDescription {
            reason: "description contains control characters".to_string(),
        });
    }
    Ok(())
}
