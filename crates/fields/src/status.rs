//! HTTP status codes, categories and range validation (RFC 9110).

use std::fmt;

use crate::ensure;
use crate::error::StatusError;

/// Lowest status code the protocol defines.
pub const MIN_STATUS_CODE: u16 = 100;

/// Highest status code the protocol defines.
pub const MAX_STATUS_CODE: u16 = 599;

macro_rules! status_codes {
    (
        $(
            $variant:ident => $code:literal, $phrase:literal, $description:literal,
        )+
    ) => {
        /// The standard HTTP status codes with their reason phrases.
        ///
        /// This is the closed set registered by the RFCs; arbitrary codes
        /// in the 100..=599 range are still valid on the wire and are
        /// handled by the free functions in this module
        /// ([`ensure_valid_code`], [`StatusCategory::of`]).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatusCode {
            $(
                #[doc = $description]
                $variant,
            )+
        }

        impl StatusCode {
            /// Every member of the set, useful for table-driven lookups.
            pub const ALL: &'static [StatusCode] = &[
                $(StatusCode::$variant,)+
            ];

            /// The numeric code.
            pub const fn code(&self) -> u16 {
                match self {
                    $(StatusCode::$variant => $code,)+
                }
            }

            /// The reason phrase, e.g. `"Not Found"`.
            pub const fn phrase(&self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $phrase,)+
                }
            }

            /// A one-line description of the status.
            pub const fn description(&self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $description,)+
                }
            }

            /// Reverse lookup from a numeric code; `None` for codes the
            /// registry does not define.
            pub fn from_code(code: u16) -> Option<StatusCode> {
                match code {
                    $($code => Some(StatusCode::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    Continue => 100, "Continue", "Request received, please continue.",
    SwitchingProtocols => 101, "Switching Protocols", "Switching to new protocol; obey Upgrade header.",
    Processing => 102, "Processing", "Server has received and is processing the request.",
    EarlyHints => 103, "Early Hints", "Used to return some response headers before final response.",
    Ok => 200, "OK", "Request fulfilled, document follows.",
    Created => 201, "Created", "Document created, URL follows.",
    Accepted => 202, "Accepted", "Request accepted, processing continues off-line.",
    NonAuthoritativeInformation => 203, "Non-Authoritative Information", "Request fulfilled from cache.",
    NoContent => 204, "No Content", "Request fulfilled, nothing follows.",
    ResetContent => 205, "Reset Content", "Clear input form for further input.",
    PartialContent => 206, "Partial Content", "Partial resource return due to request header.",
    MultiStatus => 207, "Multi-Status", "XML document containing multiple status codes.",
    AlreadyReported => 208, "Already Reported", "Results previously returned.",
    ImUsed => 226, "IM Used", "Request fulfilled, response is instance-manipulation.",
    MultipleChoices => 300, "Multiple Choices", "Multiple resources match the request.",
    MovedPermanently => 301, "Moved Permanently", "Resource has permanently moved to a new URL.",
    Found => 302, "Found", "Resource temporarily resides at a different URL.",
    SeeOther => 303, "See Other", "Response to request can be found at a different URL.",
    NotModified => 304, "Not Modified", "Resource has not been modified since last request.",
    UseProxy => 305, "Use Proxy", "Must use proxy to access resource.",
    TemporaryRedirect => 307, "Temporary Redirect", "Resource temporarily resides at a different URL.",
    PermanentRedirect => 308, "Permanent Redirect", "Resource has permanently moved to a new URL.",
    BadRequest => 400, "Bad Request", "Server cannot process request due to client error.",
    Unauthorized => 401, "Unauthorized", "Authentication required and has failed or not been provided.",
    PaymentRequired => 402, "Payment Required", "Reserved for future use.",
    Forbidden => 403, "Forbidden", "Server refuses to authorize the request.",
    NotFound => 404, "Not Found", "Requested resource could not be found.",
    MethodNotAllowed => 405, "Method Not Allowed", "Request method not allowed for the resource.",
    NotAcceptable => 406, "Not Acceptable", "Resource not capable of generating acceptable content.",
    ProxyAuthenticationRequired => 407, "Proxy Authentication Required", "Proxy authentication required.",
    RequestTimeout => 408, "Request Timeout", "Server timed out waiting for the request.",
    Conflict => 409, "Conflict", "Request conflicts with current state of the resource.",
    Gone => 410, "Gone", "Resource is no longer available and has no forwarding address.",
    LengthRequired => 411, "Length Required", "Content-Length header required.",
    PreconditionFailed => 412, "Precondition Failed", "Precondition in request header evaluated to false.",
    ContentTooLarge => 413, "Content Too Large", "Request entity is larger than server is willing to process.",
    UriTooLong => 414, "URI Too Long", "Request URI is longer than server is willing to interpret.",
    UnsupportedMediaType => 415, "Unsupported Media Type", "Request entity media type not supported.",
    RangeNotSatisfiable => 416, "Range Not Satisfiable", "Requested range not satisfiable.",
    ExpectationFailed => 417, "Expectation Failed", "Expect header requirement cannot be met.",
    ImATeapot => 418, "I'm a Teapot", "Server refuses to brew coffee because it is a teapot.",
    MisdirectedRequest => 421, "Misdirected Request", "Request directed at server unable to produce response.",
    UnprocessableEntity => 422, "Unprocessable Entity", "Request well-formed but contains semantic errors.",
    Locked => 423, "Locked", "Resource is locked.",
    FailedDependency => 424, "Failed Dependency", "Request failed due to failure of a previous request.",
    TooEarly => 425, "Too Early", "Server unwilling to risk processing potentially replayed request.",
    UpgradeRequired => 426, "Upgrade Required", "Client should switch to a different protocol.",
    PreconditionRequired => 428, "Precondition Required", "Origin server requires conditional request.",
    TooManyRequests => 429, "Too Many Requests", "User has sent too many requests in a given time.",
    RequestHeaderFieldsTooLarge => 431, "Request Header Fields Too Large", "Server unwilling to process due to large header fields.",
    UnavailableForLegalReasons => 451, "Unavailable For Legal Reasons", "Resource unavailable due to legal demands.",
    InternalServerError => 500, "Internal Server Error", "Server encountered an unexpected condition.",
    NotImplemented => 501, "Not Implemented", "Server does not support the functionality required.",
    BadGateway => 502, "Bad Gateway", "Server received invalid response from upstream server.",
    ServiceUnavailable => 503, "Service Unavailable", "Server currently unable to handle the request.",
    GatewayTimeout => 504, "Gateway Timeout", "Server did not receive timely response from upstream.",
    HttpVersionNotSupported => 505, "HTTP Version Not Supported", "Server does not support the HTTP version used.",
    VariantAlsoNegotiates => 506, "Variant Also Negotiates", "Content negotiation resulted in circular reference.",
    InsufficientStorage => 507, "Insufficient Storage", "Server unable to store the representation.",
    LoopDetected => 508, "Loop Detected", "Server detected infinite loop while processing.",
    NotExtended => 510, "Not Extended", "Further extensions required for the request.",
    NetworkAuthenticationRequired => 511, "Network Authentication Required", "Client needs to authenticate to gain network access.",
}

impl StatusCode {
    /// The class the code belongs to.
    pub const fn category(&self) -> StatusCategory {
        StatusCategory::of(self.code())
    }

    /// True for 1xx codes.
    pub const fn is_informational(&self) -> bool {
        matches!(self.category(), StatusCategory::Informational)
    }

    /// True for 2xx codes.
    pub const fn is_success(&self) -> bool {
        matches!(self.category(), StatusCategory::Success)
    }

    /// True for 3xx codes.
    pub const fn is_redirect(&self) -> bool {
        matches!(self.category(), StatusCategory::Redirect)
    }

    /// True for 4xx codes.
    pub const fn is_client_error(&self) -> bool {
        matches!(self.category(), StatusCategory::ClientError)
    }

    /// True for 5xx codes.
    pub const fn is_server_error(&self) -> bool {
        matches!(self.category(), StatusCategory::ServerError)
    }

    /// True for 4xx and 5xx codes.
    pub const fn is_error(&self) -> bool {
        self.code() >= 400
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.phrase())
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

/// The class of a status code, determined by its hundreds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    /// Outside the 100..=599 range the protocol defines.
    Unknown,
}

impl StatusCategory {
    /// Classifies any numeric code, registered or not.
    pub const fn of(code: u16) -> StatusCategory {
        match code {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirect,
            400..=499 => StatusCategory::ClientError,
            500..=599 => StatusCategory::ServerError,
            _ => StatusCategory::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Informational => "informational",
            StatusCategory::Success => "success",
            StatusCategory::Redirect => "redirect",
            StatusCategory::ClientError => "client_error",
            StatusCategory::ServerError => "server_error",
            StatusCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the code is inside the protocol-defined 100..=599 range.
pub const fn is_valid_code(code: u16) -> bool {
    MIN_STATUS_CODE <= code && code <= MAX_STATUS_CODE
}

/// Fails with [`StatusError::OutOfRange`] when the code is outside
/// 100..=599.
pub fn ensure_valid_code(code: u16) -> Result<(), StatusError> {
    ensure_code_in_range(code, MIN_STATUS_CODE, MAX_STATUS_CODE)
}

/// Fails when the code is outside `min..=max` (both bounds are first
/// checked against the protocol range).
pub fn ensure_code_in_range(code: u16, min: u16, max: u16) -> Result<(), StatusError> {
    ensure!(is_valid_code(code), StatusError::out_of_range(code, MIN_STATUS_CODE, MAX_STATUS_CODE));
    ensure!(min <= code && code <= max, StatusError::out_of_range(code, min, max));
    Ok(())
}

/// Whether the code is one of the registered [`StatusCode`] members.
pub fn is_standard_code(code: u16) -> bool {
    StatusCode::from_code(code).is_some()
}

/// Fails when the code is outside the valid range or not a registered
/// status code.
pub fn ensure_standard_code(code: u16) -> Result<(), StatusError> {
    ensure_valid_code(code)?;
    ensure!(is_standard_code(code), StatusError::non_standard(code));
    Ok(())
}

/// The reason phrase for a registered code; `None` otherwise.
pub fn phrase_of(code: u16) -> Option<&'static str> {
    StatusCode::from_code(code).map(|s| s.phrase())
}
