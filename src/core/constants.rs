/// Application-wide constants to avoid magic values throughout the codebase.
/// Output format constants
pub mod output_formats {
    /// Text output format - one colorized line per probed URL
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Process exit code constants
pub mod exit_codes {
    /// Every probed URL responded with 200
    pub const SUCCESS: i32 = 0;
    /// Input could not be read (missing file, bad config)
    pub const INPUT_ERROR: i32 = 2;
    /// At least one URL was broken, suspicious, or unreachable
    pub const LIVENESS_FAILURE: i32 = 3;
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status treated as alive
    pub const OK: u16 = 200;
    /// HTTP 400 Bad Request
    pub const BAD_REQUEST: u16 = 400;
    /// HTTP 404 Not Found
    pub const NOT_FOUND: u16 = 404;
}

/// Probe engine constants
pub mod probe {
    /// Fixed per-request timeout in seconds, enforced by the HTTP client
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 3;
    /// Maximum redirects followed before a request errors out
    pub const MAX_REDIRECTS: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 2);
    }

    #[test]
    fn test_exit_code_constants() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::INPUT_ERROR, 2);
        assert_eq!(exit_codes::LIVENESS_FAILURE, 3);
    }

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::OK, 200);
        assert_eq!(http_status::BAD_REQUEST, 400);
        assert_eq!(http_status::NOT_FOUND, 404);
    }

    #[test]
    fn test_probe_constants() {
        assert_eq!(probe::REQUEST_TIMEOUT_SECONDS, 3);
        assert_eq!(probe::MAX_REDIRECTS, 10);
    }
}
