//! Strictly validated value types for HTTP protocol metadata
//!
//! This crate provides immutable value types for header fields,
//! authentication credentials, cookies and timeout configuration. Its job
//! is to keep malformed or malicious values (a CRLF-injected header value,
//! a cookie value smuggling a semicolon) out of an HTTP client or server
//! pipeline, while keeping construction and lookup ergonomic.
//!
//! # Features
//!
//! - RFC 7230 validation of field names and values over raw bytes
//! - Insertion-ordered, case-insensitive header collection with a
//!   per-collection duplicate policy and the `Set-Cookie` exemption
//! - No way to construct an invalid [`Header`]: validation runs once, at
//!   construction
//! - Non-failing ([`ValidationResult`]) and failing (`ensure_*`,
//!   `Result`) validation conventions, chosen explicitly by the caller
//! - Request method and status code registries with reason phrases,
//!   category classification and range validation
//! - Basic/Bearer credential encoding and decoding
//! - RFC 6265 cookie rendering and jar filtering
//! - Interop with [`http::HeaderMap`] and wire encoding into
//!   [`bytes::BytesMut`]
//!
//! # Example
//!
//! ```
//! use http_fields::{Headers, HeaderBuilder, StandardHeader};
//!
//! let mut headers = Headers::new();
//! headers.add_raw(StandardHeader::Host, "example.com")?;
//! headers.add(HeaderBuilder::content_type("text/html")?)?;
//!
//! // case-insensitive lookup, original casing preserved
//! assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
//! assert_eq!(headers.to_string(), "Host: example.com\nContent-Type: text/html");
//!
//! // injection attempts never get in
//! assert!(headers.add_raw("X-Evil", "a\r\nSet-Cookie: x").is_err());
//!
//! // duplicates are policy-checked at insertion
//! assert!(headers.add_raw("Host", "other.example").is_err());
//! # Ok::<(), http_fields::FieldError>(())
//! ```
//!
//! # Architecture
//!
//! - [`validate`]: pure RFC 7230 field validation and the duplicate
//!   policy tables
//! - [`header`] / [`headers`]: the validated field value type and the
//!   ordered, case-insensitive collection
//! - [`name`] / [`builder`]: well-known header names and factories
//! - [`method`] / [`status`]: the request method set and the status code
//!   registry with category classification and range validation
//! - [`auth`], [`cookie`], [`timeout`]: credential, cookie and timeout
//!   value types built on the same validation core
//!
//! # Deliberate restrictions
//!
//! - Any CR or LF in a field value is invalid. Obsolete line folding
//!   (`obs-fold`) is not supported and will not be: it is the parsing
//!   ambiguity that header-injection attacks exploit.
//! - This crate does not parse raw HTTP messages and performs no I/O;
//!   timeout values are carried, never enforced.
//! - No internal locking: share a collection immutably across threads, or
//!   synchronize mutation externally.

pub mod auth;
pub mod builder;
pub mod cookie;
pub mod error;
pub mod header;
pub mod headers;
pub mod method;
pub mod name;
pub mod status;
pub mod timeout;
pub mod validate;

mod utils;
pub(crate) use utils::ensure;

pub use auth::{BasicAuth, BearerAuth};
pub use builder::HeaderBuilder;
pub use cookie::{Cookie, CookieJar, SameSite};
pub use error::{AuthError, CookieError, FieldError, StatusError, TimeoutError};
pub use header::Header;
pub use headers::Headers;
pub use method::HttpMethod;
pub use name::StandardHeader;
pub use status::{StatusCategory, StatusCode};
pub use timeout::Timeout;
pub use validate::{DEFAULT_MAX_FIELD_SIZE, ValidationResult};
