//! Error types for header validation, credentials, cookies and timeouts.

use thiserror::Error;

/// Errors produced by field validation and by [`Headers`] mutations.
///
/// Every variant carries enough detail (the offending name, value position
/// or size) to report the exact violation without re-deriving it.
///
/// [`Headers`]: crate::headers::Headers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid header name: {reason}")]
    InvalidName { reason: String },

    #[error("invalid header value: {reason}")]
    InvalidValue { reason: String },

    #[error("header size {size} bytes exceeds maximum {max_size} bytes")]
    SizeExceeded { size: usize, max_size: usize },

    #[error("{}", duplicate_reason(.name, *.combinable))]
    DuplicateField { name: String, combinable: bool },

    #[error("header field not found: '{name}'")]
    MissingField { name: String },
}

fn duplicate_reason(name: &str, combinable: bool) -> String {
    if combinable {
        format!("duplicate header '{name}' should be combined with comma separation instead of multiple header fields")
    } else {
        format!("duplicate header field not allowed: '{name}'")
    }
}

impl FieldError {
    pub fn invalid_name<S: ToString>(reason: S) -> Self {
        Self::InvalidName { reason: reason.to_string() }
    }

    pub fn invalid_value<S: ToString>(reason: S) -> Self {
        Self::InvalidValue { reason: reason.to_string() }
    }

    pub fn size_exceeded(size: usize, max_size: usize) -> Self {
        Self::SizeExceeded { size, max_size }
    }

    pub fn duplicate_field<S: ToString>(name: S, combinable: bool) -> Self {
        Self::DuplicateField { name: name.to_string(), combinable }
    }

    pub fn missing_field<S: ToString>(name: S) -> Self {
        Self::MissingField { name: name.to_string() }
    }
}

/// Errors produced when encoding or decoding authentication credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("empty authorization header")]
    EmptyHeader,

    #[error("invalid authorization header format: '{value}'")]
    MalformedHeader { value: String },

    #[error("authentication scheme must be {expected}, got: '{actual}'")]
    WrongScheme { expected: &'static str, actual: String },

    #[error("invalid credentials encoding: {reason}")]
    InvalidEncoding { reason: String },

    #[error("invalid credentials format: missing colon separator")]
    MissingColon,

    #[error("user id cannot contain a colon")]
    InvalidUsername,

    #[error("bearer token cannot be empty or contain whitespace")]
    InvalidToken,
}

impl AuthError {
    pub fn malformed_header<S: ToString>(value: S) -> Self {
        Self::MalformedHeader { value: value.to_string() }
    }

    pub fn wrong_scheme<S: ToString>(expected: &'static str, actual: S) -> Self {
        Self::WrongScheme { expected, actual: actual.to_string() }
    }

    pub fn invalid_encoding<S: ToString>(reason: S) -> Self {
        Self::InvalidEncoding { reason: reason.to_string() }
    }
}

/// Errors produced when constructing a [`Cookie`].
///
/// [`Cookie`]: crate::cookie::Cookie
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error("invalid cookie name: {0}")]
    InvalidName(#[from] FieldError),

    #[error("invalid cookie value: {value:?}")]
    InvalidValue { value: String },
}

impl CookieError {
    pub fn invalid_value<S: ToString>(value: S) -> Self {
        Self::InvalidValue { value: value.to_string() }
    }
}

/// Errors produced by status code validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("status code {code} is outside range {min}-{max}")]
    OutOfRange { code: u16, min: u16, max: u16 },

    #[error("status code {code} is not a standard HTTP status code")]
    NonStandard { code: u16 },
}

impl StatusError {
    pub fn out_of_range(code: u16, min: u16, max: u16) -> Self {
        Self::OutOfRange { code, min, max }
    }

    pub fn non_standard(code: u16) -> Self {
        Self::NonStandard { code }
    }
}

/// Errors produced when converting raw numbers into a [`Timeout`].
///
/// [`Timeout`]: crate::timeout::Timeout
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeoutError {
    #[error("timeout seconds must be finite and non-negative, got {value}")]
    InvalidValue { value: f64 },
}
