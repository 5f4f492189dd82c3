use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("resort page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid source base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("invalid CSS selector \"{selector}\": {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

impl ScraperError {
    /// `true` for failures of the request itself: network, timeout, TLS, or a
    /// non-2xx status. Everything else is an unexpected fault.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ScraperError::Http(_)
                | ScraperError::NotFound { .. }
                | ScraperError::UnexpectedStatus { .. }
        )
    }

    /// Message published in the `error` field of a failed status record.
    #[must_use]
    pub fn record_message(&self) -> String {
        if self.is_transport() {
            format!("Error de conexión: {self}")
        } else {
            format!("Error: {self}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_transport() {
        let err = ScraperError::NotFound {
            url: "https://example.com/x/".to_string(),
        };
        assert!(err.is_transport());
        assert_eq!(
            err.record_message(),
            "Error de conexión: resort page not found: https://example.com/x/"
        );
    }

    #[test]
    fn unexpected_status_is_transport() {
        let err = ScraperError::UnexpectedStatus {
            status: 503,
            url: "https://example.com/x/".to_string(),
        };
        assert!(err.is_transport());
        assert!(err.record_message().starts_with("Error de conexión: "));
    }

    #[test]
    fn selector_error_is_not_transport() {
        let err = ScraperError::Selector {
            selector: "strong.",
            reason: "unexpected end".to_string(),
        };
        assert!(!err.is_transport());
        assert!(err.record_message().starts_with("Error: invalid CSS selector"));
    }
}
