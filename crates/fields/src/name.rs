//! Well-known HTTP header names (RFC 9110, RFC 6265 and friends).

use std::fmt;

macro_rules! standard_headers {
    (
        $(
            $(#[$docs:meta])*
            $variant:ident => $canonical:literal,
        )+
    ) => {
        /// A closed set of standard header names with their canonical
        /// string form.
        ///
        /// Anywhere a header name is expected, a `StandardHeader` can be
        /// passed instead of a string; it converts to its canonical
        /// casing. There is no dynamic registration: custom fields are
        /// plain strings.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StandardHeader {
            $(
                $(#[$docs])*
                $variant,
            )+
        }

        impl StandardHeader {
            /// Every member of the set, useful for table-driven lookups.
            pub const ALL: &'static [StandardHeader] = &[
                $(StandardHeader::$variant,)+
            ];

            /// The canonical string form, with conventional casing.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(StandardHeader::$variant => $canonical,)+
                }
            }

            /// Case-insensitive reverse lookup from a field name.
            pub fn from_name(name: &str) -> Option<StandardHeader> {
                $(
                    if name.eq_ignore_ascii_case($canonical) {
                        return Some(StandardHeader::$variant);
                    }
                )+
                None
            }
        }
    };
}

standard_headers! {
    Accept => "Accept",
    AcceptCharset => "Accept-Charset",
    AcceptEncoding => "Accept-Encoding",
    AcceptLanguage => "Accept-Language",
    AcceptRanges => "Accept-Ranges",
    AccessControlAllowCredentials => "Access-Control-Allow-Credentials",
    AccessControlAllowHeaders => "Access-Control-Allow-Headers",
    AccessControlAllowMethods => "Access-Control-Allow-Methods",
    AccessControlAllowOrigin => "Access-Control-Allow-Origin",
    AccessControlExposeHeaders => "Access-Control-Expose-Headers",
    AccessControlMaxAge => "Access-Control-Max-Age",
    AccessControlRequestHeaders => "Access-Control-Request-Headers",
    AccessControlRequestMethod => "Access-Control-Request-Method",
    Age => "Age",
    Allow => "Allow",
    Authorization => "Authorization",
    CacheControl => "Cache-Control",
    Connection => "Connection",
    ContentDisposition => "Content-Disposition",
    ContentEncoding => "Content-Encoding",
    ContentLanguage => "Content-Language",
    ContentLength => "Content-Length",
    ContentLocation => "Content-Location",
    ContentRange => "Content-Range",
    ContentSecurityPolicy => "Content-Security-Policy",
    ContentType => "Content-Type",
    Cookie => "Cookie",
    Date => "Date",
    ETag => "ETag",
    Expect => "Expect",
    Expires => "Expires",
    Forwarded => "Forwarded",
    From => "From",
    Host => "Host",
    IfMatch => "If-Match",
    IfModifiedSince => "If-Modified-Since",
    IfNoneMatch => "If-None-Match",
    IfRange => "If-Range",
    IfUnmodifiedSince => "If-Unmodified-Since",
    KeepAlive => "Keep-Alive",
    LastModified => "Last-Modified",
    Location => "Location",
    MaxForwards => "Max-Forwards",
    Origin => "Origin",
    Pragma => "Pragma",
    ProxyAuthenticate => "Proxy-Authenticate",
    ProxyAuthorization => "Proxy-Authorization",
    Range => "Range",
    Referer => "Referer",
    ReferrerPolicy => "Referrer-Policy",
    RetryAfter => "Retry-After",
    Server => "Server",
    SetCookie => "Set-Cookie",
    StrictTransportSecurity => "Strict-Transport-Security",
    Te => "TE",
    Trailer => "Trailer",
    TransferEncoding => "Transfer-Encoding",
    Upgrade => "Upgrade",
    UpgradeInsecureRequests => "Upgrade-Insecure-Requests",
    UserAgent => "User-Agent",
    Vary => "Vary",
    Via => "Via",
    Warning => "Warning",
    WwwAuthenticate => "WWW-Authenticate",
    XContentTypeOptions => "X-Content-Type-Options",
    XForwardedFor => "X-Forwarded-For",
    XForwardedHost => "X-Forwarded-Host",
    XForwardedProto => "X-Forwarded-Proto",
    XFrameOptions => "X-Frame-Options",
}

impl AsRef<str> for StandardHeader {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StandardHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StandardHeader> for &'static str {
    fn from(name: StandardHeader) -> Self {
        name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_field_name;

    #[test]
    fn test_canonical_strings() {
        assert_eq!(StandardHeader::ContentType.as_str(), "Content-Type");
        assert_eq!(StandardHeader::ETag.as_str(), "ETag");
        assert_eq!(StandardHeader::WwwAuthenticate.as_str(), "WWW-Authenticate");
        assert_eq!(StandardHeader::Te.to_string(), "TE");
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(StandardHeader::from_name("content-type"), Some(StandardHeader::ContentType));
        assert_eq!(StandardHeader::from_name("CONTENT-TYPE"), Some(StandardHeader::ContentType));
        assert_eq!(StandardHeader::from_name("Set-cookie"), Some(StandardHeader::SetCookie));
        assert_eq!(StandardHeader::from_name("X-Totally-Custom"), None);
    }

    #[test]
    fn test_every_canonical_name_is_a_valid_token() {
        for name in StandardHeader::ALL {
            assert!(validate_field_name(name.as_str()).is_valid(), "{name} must be a token");
        }
    }
}
