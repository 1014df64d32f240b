use serde::Serialize;

use crate::core::constants::http_status;

use std::fmt;

/// Classification buckets for a single liveness probe.
///
/// A received response maps onto the first three variants by status code.
/// `TransportError` covers everything that never produced a status code:
/// connection refused, timeout, DNS failure, TLS failure, malformed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlStatus {
    /// 200 - the endpoint is alive
    Ok,
    /// 400 or 404 - the endpoint answered but the resource is broken
    ClientError,
    /// Any other received status (3xx, 401/403, 5xx, ...)
    Unknown,
    /// No response at all
    TransportError,
}

impl UrlStatus {
    /// Bucket a received HTTP status code.
    pub fn from_code(code: u16) -> Self {
        match code {
            http_status::OK => Self::Ok,
            http_status::BAD_REQUEST | http_status::NOT_FOUND => Self::ClientError,
            _ => Self::Unknown,
        }
    }

    /// Only a 200 counts as alive.
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Human token used in the per-probe output line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "GOOD",
            Self::ClientError => "BAD",
            Self::Unknown => "UNKNOWN",
            Self::TransportError => "DEAD",
        }
    }
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The result of probing one URL that produced a response.
///
/// Immutable once produced. Serializes as `{"url": ..., "status": ...}`;
/// the classification is derived from the status code and not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub url: String,
    pub status: u16,
    #[serde(skip)]
    classification: UrlStatus,
}

impl ProbeOutcome {
    pub fn new(url: String, status: u16) -> Self {
        Self {
            url,
            status,
            classification: UrlStatus::from_code(status),
        }
    }

    pub fn classification(&self) -> UrlStatus {
        self.classification
    }

    /// Whether this outcome leaves the aggregate severity untouched.
    pub fn is_alive(&self) -> bool {
        self.classification.is_alive()
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}",
            self.classification.label(),
            self.status,
            self.url
        )
    }
}
