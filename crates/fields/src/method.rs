//! HTTP request methods (RFC 9110, RFC 5789).

use std::fmt;

macro_rules! http_methods {
    (
        $(
            $variant:ident => $name:literal, $description:literal,
        )+
    ) => {
        /// A closed set of HTTP request methods.
        ///
        /// RFC 9110 defines CONNECT, DELETE, GET, HEAD, OPTIONS, POST,
        /// PUT and TRACE; RFC 5789 adds PATCH. Method names are
        /// case-sensitive on the wire, and so is [`from_name`].
        ///
        /// [`from_name`]: HttpMethod::from_name
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HttpMethod {
            $(
                #[doc = $description]
                $variant,
            )+
        }

        impl HttpMethod {
            /// Every member of the set, useful for table-driven lookups.
            pub const ALL: &'static [HttpMethod] = &[
                $(HttpMethod::$variant,)+
            ];

            /// The method token as it appears on the request line.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(HttpMethod::$variant => $name,)+
                }
            }

            /// A one-line description of what the method does.
            pub const fn description(&self) -> &'static str {
                match self {
                    $(HttpMethod::$variant => $description,)+
                }
            }

            /// Exact-match reverse lookup from a method token.
            ///
            /// Method tokens are case-sensitive: `"get"` is not a
            /// standard method and returns `None`.
            pub fn from_name(name: &str) -> Option<HttpMethod> {
                match name {
                    $($name => Some(HttpMethod::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

http_methods! {
    Connect => "CONNECT", "Establish a connection to the server.",
    Delete => "DELETE", "Remove the target.",
    Get => "GET", "Retrieve the target.",
    Head => "HEAD", "Same as GET, but only retrieve the status line and header section.",
    Options => "OPTIONS", "Describe the communication options for the target.",
    Patch => "PATCH", "Apply partial modifications to a target.",
    Post => "POST", "Perform target-specific processing with the request payload.",
    Put => "PUT", "Replace the target with the request payload.",
    Trace => "TRACE", "Perform a message loop-back test along the path to the target.",
}

impl HttpMethod {
    /// Whether the method is safe (RFC 9110 §9.2.1): it requests no
    /// state change on the target.
    pub const fn is_safe(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace)
    }

    /// Whether the method is idempotent (RFC 9110 §9.2.2): repeating
    /// the request has the same intended effect as sending it once.
    pub const fn is_idempotent(&self) -> bool {
        self.is_safe()
            || matches!(self, HttpMethod::Put | HttpMethod::Delete)
    }
}

impl AsRef<str> for HttpMethod {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for &'static str {
    fn from(method: HttpMethod) -> Self {
        method.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_tokens() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::ALL.len(), 9);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(HttpMethod::from_name("DELETE"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::from_name("delete"), None);
        assert_eq!(HttpMethod::from_name("BREW"), None);
    }

    #[test]
    fn test_descriptions_present() {
        for method in HttpMethod::ALL {
            assert!(!method.description().is_empty(), "{method} needs a description");
        }
        assert_eq!(HttpMethod::Get.description(), "Retrieve the target.");
    }

    #[test]
    fn test_safety_and_idempotence() {
        assert!(HttpMethod::Get.is_safe());
        assert!(HttpMethod::Head.is_safe());
        assert!(!HttpMethod::Post.is_safe());

        assert!(HttpMethod::Put.is_idempotent());
        assert!(HttpMethod::Delete.is_idempotent());
        assert!(HttpMethod::Get.is_idempotent());
        assert!(!HttpMethod::Post.is_idempotent());
        assert!(!HttpMethod::Patch.is_idempotent());
    }
}
