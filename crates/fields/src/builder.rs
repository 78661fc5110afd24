//! Convenience factories for common standard headers.

use crate::error::FieldError;
use crate::header::Header;
use crate::name::StandardHeader;

macro_rules! header_factories {
    (
        $(
            $(#[$docs:meta])*
            $method:ident => $variant:ident,
        )+
    ) => {
        impl HeaderBuilder {
            $(
                $(#[$docs])*
                pub fn $method(value: impl AsRef<str>) -> Result<Header, FieldError> {
                    Header::new(StandardHeader::$variant, value)
                }
            )+
        }
    };
}

/// Static factory methods producing validated headers for the common
/// standard names.
///
/// ```
/// use http_fields::HeaderBuilder;
///
/// let header = HeaderBuilder::content_type("application/json")?;
/// assert_eq!(header.to_string(), "Content-Type: application/json");
/// # Ok::<(), http_fields::FieldError>(())
/// ```
#[derive(Debug)]
pub struct HeaderBuilder;

header_factories! {
    accept => Accept,
    accept_charset => AcceptCharset,
    accept_encoding => AcceptEncoding,
    accept_language => AcceptLanguage,
    allow => Allow,
    authorization => Authorization,
    cache_control => CacheControl,
    connection => Connection,
    content_disposition => ContentDisposition,
    content_encoding => ContentEncoding,
    content_language => ContentLanguage,
    content_length => ContentLength,
    content_type => ContentType,
    cookie => Cookie,
    date => Date,
    etag => ETag,
    expect => Expect,
    expires => Expires,
    host => Host,
    if_match => IfMatch,
    if_modified_since => IfModifiedSince,
    if_none_match => IfNoneMatch,
    last_modified => LastModified,
    location => Location,
    origin => Origin,
    proxy_authenticate => ProxyAuthenticate,
    proxy_authorization => ProxyAuthorization,
    range => Range,
    referer => Referer,
    retry_after => RetryAfter,
    server => Server,
    set_cookie => SetCookie,
    transfer_encoding => TransferEncoding,
    upgrade => Upgrade,
    user_agent => UserAgent,
    vary => Vary,
    via => Via,
    www_authenticate => WwwAuthenticate,
}
