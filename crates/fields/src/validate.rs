//! RFC 7230 validation for HTTP header field names and values.
//!
//! This module provides pure validation functions used by [`Header`] and
//! [`Headers`] before any field enters a message. Field names must consist
//! of RFC 7230 `tchar` bytes; field values may contain VCHAR, SP, HTAB and
//! obs-text (0x80-0xFF) bytes only.
//!
//! Bare CR and LF are always rejected. Obsolete line folding (`obs-fold`)
//! is deliberately not supported: folding is the parsing ambiguity that
//! response-splitting attacks rely on, so a value containing any CR or LF
//! byte never validates.
//!
//! Every check comes in two calling conventions:
//!
//! - `validate_*` returns a [`ValidationResult`] for programmatic branching
//! - `ensure_*` returns `Result<(), FieldError>` for `?`-propagation
//!
//! [`Header`]: crate::header::Header
//! [`Headers`]: crate::headers::Headers

use crate::ensure;
use crate::error::FieldError;

/// Default maximum size in bytes for a single header field (name + value).
///
/// Matches the limit commonly enforced by HTTP servers. Every size check
/// takes the limit as a parameter, so deployments needing larger fields can
/// pass their own.
pub const DEFAULT_MAX_FIELD_SIZE: usize = 8192;

/// Folded field names that may legitimately appear multiple times in one
/// message regardless of the collection's duplicate policy.
///
/// `Set-Cookie` is the one standard field whose values cannot be combined
/// into a comma separated list (RFC 7230 section 3.2.2).
pub const ALLOWED_DUPLICATE_FIELDS: &[&str] = &["set-cookie"];

/// Folded field names defined as comma separated lists (RFC 9110).
///
/// A duplicate of one of these fields gets a distinct error message: the
/// values should have been combined into a single field. Sorted for binary
/// search.
pub const COMMA_SEPARATED_FIELDS: &[&str] = &[
    "accept",
    "accept-charset",
    "accept-encoding",
    "accept-language",
    "access-control-allow-headers",
    "access-control-allow-methods",
    "access-control-expose-headers",
    "access-control-request-headers",
    "allow",
    "cache-control",
    "connection",
    "content-encoding",
    "content-language",
    "expect",
    "if-match",
    "if-none-match",
    "pragma",
    "proxy-authenticate",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "vary",
    "via",
    "warning",
    "www-authenticate",
];

/// Returns whether a folded field name is exempt from duplicate checking.
pub fn allows_duplicates(folded_name: &str) -> bool {
    ALLOWED_DUPLICATE_FIELDS.contains(&folded_name)
}

/// Returns whether a folded field name is a comma separated list field.
pub fn is_comma_separated(folded_name: &str) -> bool {
    COMMA_SEPARATED_FIELDS.binary_search(&folded_name).is_ok()
}

/// Outcome of a validation check that does not fail the caller.
///
/// Carries the [`FieldError`] describing the violation when invalid, so a
/// caller can branch on validity and still log the exact reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    error: Option<FieldError>,
}

impl ValidationResult {
    /// A successful validation.
    pub fn valid() -> Self {
        Self { error: None }
    }

    /// A failed validation carrying the violation.
    pub fn invalid(error: FieldError) -> Self {
        Self { error: Some(error) }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The violation, when invalid.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Converts into the failing convention.
    pub fn into_result(self) -> Result<(), FieldError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(error) => Self::invalid(error),
        }
    }
}

// RFC 7230 tchar: "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" /
// "." / "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
const TCHAR_TABLE: [bool; 256] = build_tchar_table();

const fn build_tchar_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0usize;
    while b < 256 {
        table[b] = matches!(
            b as u8,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
                | b'0'..=b'9'
                | b'a'..=b'z'
                | b'A'..=b'Z'
        );
        b += 1;
    }
    table
}

#[inline]
fn is_tchar(b: u8) -> bool {
    TCHAR_TABLE[b as usize]
}

// field value byte: VCHAR / SP / HTAB / obs-text
#[inline]
fn is_value_byte(b: u8) -> bool {
    matches!(b, 0x20..=0x7E | 0x09 | 0x80..=0xFF)
}

/// Checks a field name against the RFC 7230 `token` grammar, returning an
/// error on the first offending byte.
pub fn ensure_field_name(name: &str) -> Result<(), FieldError> {
    ensure!(!name.is_empty(), FieldError::invalid_name("header name cannot be empty"));

    for (i, b) in name.bytes().enumerate() {
        if !is_tchar(b) {
            return Err(FieldError::invalid_name(format!(
                "header name {name:?} contains invalid byte at position {i}: 0x{b:02X}"
            )));
        }
    }
    Ok(())
}

/// Non-failing form of [`ensure_field_name`].
pub fn validate_field_name(name: &str) -> ValidationResult {
    ensure_field_name(name).into()
}

/// Checks a field value for forbidden bytes.
///
/// Bare CR, LF and NUL never validate; neither does any other control byte
/// except HTAB. Leading and trailing whitespace is permitted and is not
/// trimmed here; callers wanting trimmed values apply
/// [`normalize_field_value`] before construction.
pub fn ensure_field_value(value: &str) -> Result<(), FieldError> {
    for (i, b) in value.bytes().enumerate() {
        if !is_value_byte(b) {
            let reason = if b == b'\r' || b == b'\n' {
                format!(
                    "header value contains bare CR or LF at position {i} (obsolete line folding is not supported)"
                )
            } else {
                format!("header value contains invalid byte at position {i}: 0x{b:02X}")
            };
            return Err(FieldError::invalid_value(reason));
        }
    }
    Ok(())
}

/// Non-failing form of [`ensure_field_value`].
pub fn validate_field_value(value: &str) -> ValidationResult {
    ensure_field_value(value).into()
}

/// Checks a complete field: name first, then value, reporting the first
/// failing check.
pub fn ensure_header_field(name: &str, value: &str) -> Result<(), FieldError> {
    ensure_field_name(name)?;
    ensure_field_value(value)
}

/// Non-failing form of [`ensure_header_field`].
pub fn validate_header_field(name: &str, value: &str) -> ValidationResult {
    ensure_header_field(name, value).into()
}

/// Checks that the combined byte length of name and value does not exceed
/// `max_size`.
///
/// Byte length, not character count: the limit bounds wire size, and
/// multi-byte characters in obs-text values count at their encoded width.
pub fn ensure_header_size(name: &str, value: &str, max_size: usize) -> Result<(), FieldError> {
    let size = name.len() + value.len();
    ensure!(size <= max_size, FieldError::size_exceeded(size, max_size));
    Ok(())
}

/// Non-failing form of [`ensure_header_size`].
pub fn validate_header_size(name: &str, value: &str, max_size: usize) -> ValidationResult {
    ensure_header_size(name, value, max_size).into()
}

/// Checks a sequence of (name, value) pairs for duplicates that a strict
/// collection would reject, honoring the exemption set.
pub fn ensure_no_duplicates<'a, I>(pairs: I) -> Result<(), FieldError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut seen: Vec<String> = Vec::new();
    for (name, _value) in pairs {
        let folded = name.to_ascii_lowercase();
        if seen.contains(&folded) {
            if allows_duplicates(&folded) {
                continue;
            }
            return Err(FieldError::duplicate_field(name, is_comma_separated(&folded)));
        }
        seen.push(folded);
    }
    Ok(())
}

/// Non-failing form of [`ensure_no_duplicates`].
pub fn validate_no_duplicates<'a, I>(pairs: I) -> ValidationResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    ensure_no_duplicates(pairs).into()
}

/// Strips leading and trailing SP / HTAB from a field value.
///
/// The validator never trims on its own; this is the explicit helper for
/// callers that want normalized values before constructing a header.
pub fn normalize_field_value(value: &str) -> &str {
    value.trim_matches([' ', '\t'])
}
