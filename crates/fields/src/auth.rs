//! Basic and Bearer authentication credentials (RFC 7617, RFC 6750).
//!
//! Both types are immutable values that encode to an `Authorization`
//! header value and decode from one. The header collection treats the
//! encoded strings as ordinary field values; nothing here bypasses field
//! validation.

use std::fmt;

use base64::prelude::*;

use crate::error::{AuthError, FieldError};
use crate::header::Header;
use crate::name::StandardHeader;

// Splits "Scheme credentials" and checks the scheme case-insensitively.
fn split_scheme<'a>(value: &'a str, expected: &'static str) -> Result<&'a str, AuthError> {
    if value.is_empty() {
        return Err(AuthError::EmptyHeader);
    }
    let (scheme, rest) = value.split_once(' ').ok_or_else(|| AuthError::malformed_header(value))?;
    if !scheme.eq_ignore_ascii_case(expected) {
        return Err(AuthError::wrong_scheme(expected, scheme));
    }
    Ok(rest)
}

/// HTTP Basic Authentication credentials (RFC 7617).
///
/// ```
/// use http_fields::BasicAuth;
///
/// let auth = BasicAuth::new("user", "pass")?;
/// assert_eq!(auth.encode(), "Basic dXNlcjpwYXNz");
/// assert_eq!(BasicAuth::decode("Basic dXNlcjpwYXNz")?, auth);
/// # Ok::<(), http_fields::AuthError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates credentials; the username must not contain a colon, since
    /// the colon separates the two parts on the wire.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<BasicAuth, AuthError> {
        let username = username.into();
        if username.contains(':') {
            return Err(AuthError::InvalidUsername);
        }
        Ok(BasicAuth { username, password: password.into() })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Parses an `Authorization` header value of the form
    /// `Basic <base64(user:pass)>`.
    pub fn decode(value: &str) -> Result<BasicAuth, AuthError> {
        let credentials = split_scheme(value, "Basic")?;

        let decoded =
            BASE64_STANDARD.decode(credentials.trim()).map_err(AuthError::invalid_encoding)?;
        let decoded = String::from_utf8(decoded).map_err(AuthError::invalid_encoding)?;

        let (username, password) = decoded.split_once(':').ok_or(AuthError::MissingColon)?;
        Ok(BasicAuth { username: username.to_owned(), password: password.to_owned() })
    }

    /// The `Authorization` header value: `Basic <base64(user:pass)>`.
    pub fn encode(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64_STANDARD.encode(credentials))
    }

    /// A validated `Authorization` header carrying the encoded value.
    pub fn to_header(&self) -> Result<Header, FieldError> {
        Header::new(StandardHeader::Authorization, self.encode())
    }
}

impl fmt::Display for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// HTTP Bearer token credentials (RFC 6750).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    /// Creates a bearer token; empty tokens and tokens containing
    /// whitespace are rejected.
    pub fn new(token: impl Into<String>) -> Result<BearerAuth, AuthError> {
        let token = token.into();
        if token.is_empty() || token.contains(char::is_whitespace) {
            return Err(AuthError::InvalidToken);
        }
        Ok(BearerAuth { token })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Parses an `Authorization` header value of the form
    /// `Bearer <token>`.
    pub fn decode(value: &str) -> Result<BearerAuth, AuthError> {
        let token = split_scheme(value, "Bearer")?.trim();
        BearerAuth::new(token)
    }

    /// The `Authorization` header value: `Bearer <token>`.
    pub fn encode(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// A validated `Authorization` header carrying the encoded value.
    pub fn to_header(&self) -> Result<Header, FieldError> {
        Header::new(StandardHeader::Authorization, self.encode())
    }
}

impl fmt::Display for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_round_trip() {
        let auth = BasicAuth::new("aladdin", "opensesame").unwrap();
        let encoded = auth.encode();
        assert_eq!(encoded, "Basic YWxhZGRpbjpvcGVuc2VzYW1l");
        assert_eq!(BasicAuth::decode(&encoded).unwrap(), auth);
    }

    #[test]
    fn test_basic_empty_password_and_colon_in_password() {
        let auth = BasicAuth::new("user", "").unwrap();
        assert_eq!(BasicAuth::decode(&auth.encode()).unwrap().password(), "");

        // only the first colon separates; the rest belongs to the password
        let auth = BasicAuth::new("user", "pa:ss").unwrap();
        let decoded = BasicAuth::decode(&auth.encode()).unwrap();
        assert_eq!(decoded.username(), "user");
        assert_eq!(decoded.password(), "pa:ss");
    }

    #[test]
    fn test_basic_colon_in_username_rejected() {
        assert_eq!(BasicAuth::new("user:name", "p"), Err(AuthError::InvalidUsername));
    }

    #[test]
    fn test_basic_decode_failures() {
        assert_eq!(BasicAuth::decode(""), Err(AuthError::EmptyHeader));
        assert!(matches!(BasicAuth::decode("Basic"), Err(AuthError::MalformedHeader { .. })));
        assert!(matches!(
            BasicAuth::decode("Bearer dXNlcjpwYXNz"),
            Err(AuthError::WrongScheme { expected: "Basic", .. })
        ));
        assert!(matches!(
            BasicAuth::decode("Basic !!!not-base64!!!"),
            Err(AuthError::InvalidEncoding { .. })
        ));
        // "dXNlcnBhc3M" is base64 of "userpass", no colon
        assert_eq!(BasicAuth::decode("Basic dXNlcnBhc3M="), Err(AuthError::MissingColon));
    }

    #[test]
    fn test_basic_scheme_case_insensitive() {
        assert!(BasicAuth::decode("basic dXNlcjpwYXNz").is_ok());
        assert!(BasicAuth::decode("BASIC dXNlcjpwYXNz").is_ok());
    }

    #[test]
    fn test_basic_to_header() {
        let header = BasicAuth::new("u", "p").unwrap().to_header().unwrap();
        assert_eq!(header.name(), "Authorization");
        assert!(header.value().starts_with("Basic "));
    }

    #[test]
    fn test_bearer_round_trip() {
        let auth = BearerAuth::new("mF_9.B5f-4.1JqM").unwrap();
        assert_eq!(auth.encode(), "Bearer mF_9.B5f-4.1JqM");
        assert_eq!(BearerAuth::decode("Bearer mF_9.B5f-4.1JqM").unwrap(), auth);
    }

    #[test]
    fn test_bearer_invalid_tokens() {
        assert_eq!(BearerAuth::new(""), Err(AuthError::InvalidToken));
        assert_eq!(BearerAuth::new("two words"), Err(AuthError::InvalidToken));
        assert_eq!(BearerAuth::new("tab\there"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_bearer_decode_failures() {
        assert_eq!(BearerAuth::decode(""), Err(AuthError::EmptyHeader));
        assert!(matches!(
            BearerAuth::decode("Basic abc"),
            Err(AuthError::WrongScheme { expected: "Bearer", .. })
        ));
        assert_eq!(BearerAuth::decode("Bearer    "), Err(AuthError::InvalidToken));
    }
}
