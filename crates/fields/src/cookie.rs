//! Cookie values and a cookie jar (RFC 6265).
//!
//! [`Cookie`] renders to a `Set-Cookie` header value; [`CookieJar`] stores
//! cookies and answers which of them apply to a request context via the
//! RFC 6265 domain-match and path-match rules. Full request matching
//! (public suffix rules, creation-time ordering) is out of scope; the jar
//! filters by domain, path, secure flag and expiry only.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::error::CookieError;
use crate::validate::ensure_field_name;

/// The `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

impl SameSite {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// cookie-octet = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
// An optional pair of surrounding DQUOTEs is permitted around the octets.
fn is_valid_cookie_value(value: &str) -> bool {
    let inner = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    };
    inner
        .bytes()
        .all(|b| (0x21..=0x7E).contains(&b) && !matches!(b, b',' | b';' | b'\\' | b'"'))
}

/// One HTTP cookie, validated at construction.
///
/// The name must be an RFC 7230 token; the value must consist of RFC 6265
/// cookie-octets (optionally surrounded by double quotes). Attributes are
/// set through the chainable `with_*` constructors; there are no mutating
/// methods afterwards.
///
/// ```
/// use http_fields::{Cookie, SameSite};
///
/// let cookie = Cookie::new("session", "abc123")?
///     .with_domain("example.com")
///     .with_same_site(SameSite::Lax)
///     .secure()
///     .http_only();
/// assert_eq!(
///     cookie.to_string(),
///     "session=abc123; Domain=example.com; Path=/; Secure; HttpOnly; SameSite=Lax"
/// );
/// # Ok::<(), http_fields::CookieError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    name: String,
    value: String,
    domain: Option<String>,
    path: String,
    expires: Option<SystemTime>,
    max_age: Option<i64>,
    secure: bool,
    http_only: bool,
    same_site: Option<SameSite>,
    partitioned: bool,
}

impl Cookie {
    /// Creates a cookie with the default path `/` and no attributes.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Cookie, CookieError> {
        let name = name.into();
        let value = value.into();
        ensure_field_name(&name)?;
        if !is_valid_cookie_value(&value) {
            return Err(CookieError::invalid_value(&value));
        }
        Ok(Cookie {
            name,
            value,
            domain: None,
            path: "/".to_owned(),
            expires: None,
            max_age: None,
            secure: false,
            http_only: false,
            same_site: None,
            partitioned: false,
        })
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Cookie {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Cookie {
        self.path = path.into();
        self
    }

    pub fn with_expires(mut self, expires: SystemTime) -> Cookie {
        self.expires = Some(expires);
        self
    }

    /// Max-Age in seconds; negative values mean "expire immediately".
    pub fn with_max_age(mut self, seconds: i64) -> Cookie {
        self.max_age = Some(seconds);
        self
    }

    pub fn secure(mut self) -> Cookie {
        self.secure = true;
        self
    }

    pub fn http_only(mut self) -> Cookie {
        self.http_only = true;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Cookie {
        self.same_site = Some(same_site);
        self
    }

    pub fn partitioned(mut self) -> Cookie {
        self.partitioned = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn expires(&self) -> Option<SystemTime> {
        self.expires
    }

    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    pub fn is_partitioned(&self) -> bool {
        self.partitioned
    }

    /// Whether the cookie's Expires attribute lies before `now`.
    ///
    /// Max-Age is not consulted here; [`CookieJar::add`] derives Expires
    /// from Max-Age when storing.
    pub fn is_expired(&self, now: SystemTime) -> bool {
        matches!(self.expires, Some(expires) if expires < now)
    }

    /// The `name=value` pair as sent in a `Cookie` request header.
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Renders the `Set-Cookie` header value with attributes in canonical
/// order.
impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;

        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }
        write!(f, "; Path={}", self.path)?;
        if let Some(expires) = self.expires {
            write!(f, "; Expires={}", httpdate::fmt_http_date(expires))?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={max_age}")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; SameSite={same_site}")?;
        }
        if self.partitioned {
            f.write_str("; Partitioned")?;
        }
        Ok(())
    }
}

// RFC 6265 section 5.1.3
fn domain_match(request_domain: &str, cookie_domain: &str) -> bool {
    let request_domain = request_domain.to_ascii_lowercase();
    let cookie_domain = cookie_domain.to_ascii_lowercase();
    let cookie_domain = cookie_domain.strip_prefix('.').unwrap_or(&cookie_domain);

    request_domain == cookie_domain
        || request_domain
            .strip_suffix(cookie_domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

// RFC 6265 section 5.1.4
fn path_match(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    match request_path.strip_prefix(cookie_path) {
        Some(rest) => cookie_path.ends_with('/') || rest.starts_with('/'),
        None => false,
    }
}

/// An ordered store of cookies with request-context filtering.
///
/// A cookie's identity in the jar is its (name, domain, path) triple:
/// adding a cookie replaces the stored one with the same identity.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    pub fn new() -> CookieJar {
        CookieJar::default()
    }

    /// Stores a cookie, replacing any existing cookie with the same name,
    /// domain and path.
    ///
    /// When the cookie carries Max-Age but no Expires, an Expires instant
    /// is derived from the current time so expiry filtering works
    /// uniformly. A non-positive Max-Age expires the cookie immediately.
    pub fn add(&mut self, cookie: Cookie) {
        let cookie = match (cookie.max_age, cookie.expires) {
            (Some(seconds), None) => {
                let expires = if seconds <= 0 {
                    UNIX_EPOCH
                } else {
                    SystemTime::now() + Duration::from_secs(seconds as u64)
                };
                cookie.with_expires(expires)
            }
            _ => cookie,
        };
        self.discard(&cookie.name, cookie.domain.as_deref(), &cookie.path);
        self.cookies.push(cookie);
    }

    /// Removes the cookie identified by (name, domain, path), if stored.
    pub fn discard(&mut self, name: &str, domain: Option<&str>, path: &str) {
        self.cookies
            .retain(|c| !(c.name == name && c.domain.as_deref() == domain && c.path == path));
    }

    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Returns the cookies applying to a request context, sorted by path
    /// length descending (RFC 6265 section 5.4 order), and evicts expired
    /// cookies from the jar as a side effect.
    ///
    /// Secure cookies match only secure request contexts.
    pub fn matching(&mut self, domain: &str, path: &str, is_secure: bool) -> Vec<Cookie> {
        let now = SystemTime::now();
        let expired = self.cookies.iter().filter(|c| c.is_expired(now)).count();
        if expired > 0 {
            debug!(count = expired, "evicting expired cookies");
            self.cookies.retain(|c| !c.is_expired(now));
        }

        let mut matches: Vec<Cookie> = self
            .cookies
            .iter()
            .filter(|c| c.domain.as_deref().is_none_or(|d| domain_match(domain, d)))
            .filter(|c| path_match(path, &c.path))
            .filter(|c| !c.secure || is_secure)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.path.len().cmp(&a.path.len()));
        matches
    }

    /// Renders the `Cookie` request header value for a request context.
    pub fn cookie_header(&mut self, domain: &str, path: &str, is_secure: bool) -> String {
        self.matching(domain, path, is_secure)
            .iter()
            .map(Cookie::pair)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cookie> {
        self.cookies.iter()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl<'a> IntoIterator for &'a CookieJar {
    type Item = &'a Cookie;
    type IntoIter = std::slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}
