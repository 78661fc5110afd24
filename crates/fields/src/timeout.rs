//! Timeout configuration values.
//!
//! [`Timeout`] only carries durations; enforcing them against a transport
//! is the consumer's job. Every field is optional, where `None` means "no
//! timeout".

use std::time::Duration;

use crate::error::TimeoutError;

/// Timeout configuration for an HTTP operation.
///
/// An immutable value of four optional durations. `Duration` cannot be
/// negative, so invalid configurations are unrepresentable; the only
/// fallible entry point is [`try_from_secs`](Timeout::try_from_secs),
/// which adapts raw float seconds.
///
/// ```
/// use std::time::Duration;
/// use http_fields::Timeout;
///
/// let timeout = Timeout::from_total(Duration::from_secs(30))
///     .with_connect(Duration::from_secs(5));
/// assert_eq!(timeout.total(), Some(Duration::from_secs(30)));
/// assert_eq!(timeout.sock_read(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeout {
    total: Option<Duration>,
    connect: Option<Duration>,
    sock_connect: Option<Duration>,
    sock_read: Option<Duration>,
}

impl Timeout {
    /// No timeout on anything.
    pub const NONE: Timeout =
        Timeout { total: None, connect: None, sock_connect: None, sock_read: None };

    /// A configuration bounding only the total operation time.
    pub fn from_total(total: Duration) -> Timeout {
        Timeout { total: Some(total), ..Timeout::NONE }
    }

    /// Adapts raw seconds into a total-only configuration, rejecting
    /// negative and non-finite values.
    pub fn try_from_secs(seconds: f64) -> Result<Timeout, TimeoutError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(TimeoutError::InvalidValue { value: seconds });
        }
        Ok(Timeout::from_total(Duration::from_secs_f64(seconds)))
    }

    pub fn with_total(mut self, total: Duration) -> Timeout {
        self.total = Some(total);
        self
    }

    pub fn with_connect(mut self, connect: Duration) -> Timeout {
        self.connect = Some(connect);
        self
    }

    pub fn with_sock_connect(mut self, sock_connect: Duration) -> Timeout {
        self.sock_connect = Some(sock_connect);
        self
    }

    pub fn with_sock_read(mut self, sock_read: Duration) -> Timeout {
        self.sock_read = Some(sock_read);
        self
    }

    /// Bound on the entire operation.
    pub fn total(&self) -> Option<Duration> {
        self.total
    }

    /// Bound on connection establishment, including any pool wait.
    pub fn connect(&self) -> Option<Duration> {
        self.connect
    }

    /// Bound on the socket connect phase specifically.
    pub fn sock_connect(&self) -> Option<Duration> {
        self.sock_connect
    }

    /// Bound on a single socket read.
    pub fn sock_read(&self) -> Option<Duration> {
        self.sock_read
    }
}

/// A bare duration means a total-only timeout.
impl From<Duration> for Timeout {
    fn from(total: Duration) -> Timeout {
        Timeout::from_total(total)
    }
}
