//! The validated, immutable header field value type.

use std::fmt;

use bytes::{BufMut, BytesMut};

use crate::error::FieldError;
use crate::validate::{DEFAULT_MAX_FIELD_SIZE, ensure_header_field, ensure_header_size};

/// One HTTP header field: a validated name paired with a validated value.
///
/// A `Header` cannot be constructed from invalid input, so holding one is
/// proof the field is RFC 7230 conformant and free of CR, LF and NUL
/// bytes. Validation runs exactly once, at construction; consumers never
/// re-check. There are no mutating methods: "changing" a header means
/// constructing a new one.
///
/// The name keeps the casing it was supplied with; comparisons and lookups
/// use the ASCII-lowercased form.
///
/// # Example
///
/// ```
/// use http_fields::{Header, StandardHeader};
///
/// let header = Header::new(StandardHeader::ContentType, "text/html")?;
/// assert_eq!(header.to_string(), "Content-Type: text/html");
///
/// assert!(Header::new("X-Test", "a\r\nSet-Cookie: evil").is_err());
/// # Ok::<(), http_fields::FieldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    /// Creates a header after validating name, value and size.
    ///
    /// The name accepts anything string-like, including a
    /// [`StandardHeader`] symbol, which contributes its canonical casing.
    /// The combined size is checked against [`DEFAULT_MAX_FIELD_SIZE`];
    /// callers with a different limit validate explicitly with
    /// [`ensure_header_size`] before construction.
    ///
    /// [`StandardHeader`]: crate::name::StandardHeader
    pub fn new(name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Header, FieldError> {
        let name = name.as_ref();
        let value = value.as_ref();
        ensure_header_field(name, value)?;
        ensure_header_size(name, value, DEFAULT_MAX_FIELD_SIZE)?;
        Ok(Header { name: name.to_owned(), value: value.to_owned() })
    }

    /// The field name with its original casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field value, exactly as supplied.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The ASCII-lowercased name used for case-insensitive comparison.
    pub fn folded_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// Returns whether this header's name matches `name` case-insensitively.
    pub fn has_name(&self, name: impl AsRef<str>) -> bool {
        self.name.eq_ignore_ascii_case(name.as_ref())
    }

    /// Copies the field into an owned (name, value) pair.
    pub fn to_tuple(&self) -> (String, String) {
        (self.name.clone(), self.value.clone())
    }

    /// Consumes the header, yielding its (name, value) parts.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }

    /// Writes the wire form `Name: Value\r\n` into `dst`.
    ///
    /// Safe to emit verbatim: construction guaranteed the value contains
    /// no CR or LF.
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(self.name.len() + self.value.len() + 4);
        dst.put_slice(self.name.as_bytes());
        dst.put_slice(b": ");
        dst.put_slice(self.value.as_bytes());
        dst.put_slice(b"\r\n");
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Equal when folded names match and values match exactly.
impl PartialEq for Header {
    fn eq(&self, other: &Header) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.value == other.value
    }
}

impl Eq for Header {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::StandardHeader;

    #[test]
    fn test_construction_and_accessors() {
        let header = Header::new("Content-Type", "text/html").unwrap();
        assert_eq!(header.name(), "Content-Type");
        assert_eq!(header.value(), "text/html");
        assert_eq!(header.folded_name(), "content-type");
    }

    #[test]
    fn test_standard_header_name() {
        let header = Header::new(StandardHeader::SetCookie, "id=1").unwrap();
        assert_eq!(header.name(), "Set-Cookie");
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert!(matches!(
            Header::new("bad name", "v"),
            Err(FieldError::InvalidName { .. })
        ));
        assert!(matches!(Header::new("", "v"), Err(FieldError::InvalidName { .. })));
    }

    #[test]
    fn test_injection_rejected() {
        for value in ["a\r\nSet-Cookie: evil", "a\nb", "a\rb", "a\0b"] {
            assert!(
                matches!(Header::new("X-Test", value), Err(FieldError::InvalidValue { .. })),
                "{value:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_oversized_rejected() {
        let value = "y".repeat(DEFAULT_MAX_FIELD_SIZE);
        assert!(matches!(
            Header::new("X", &value),
            Err(FieldError::SizeExceeded { .. })
        ));
    }

    #[test]
    fn test_equality_folds_name_not_value() {
        let a = Header::new("Content-Type", "text/html").unwrap();
        let b = Header::new("content-type", "text/html").unwrap();
        let c = Header::new("Content-Type", "TEXT/HTML").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_preserves_casing() {
        let header = Header::new("X-CuStOm", "v").unwrap();
        assert_eq!(header.to_string(), "X-CuStOm: v");
    }

    #[test]
    fn test_encode_wire_form() {
        let header = Header::new("Host", "example.com").unwrap();
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(&buf[..], b"Host: example.com\r\n");
    }
}
