use std::net::SocketAddr;
use std::path::PathBuf;

/// Desktop browser identification sent with every page fetch; the source site
/// rejects requests that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Root under which every resort status page lives, one path segment per slug.
pub const DEFAULT_SOURCE_BASE_URL: &str = "https://www.infonieve.es/estacion-esqui";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub resorts_path: PathBuf,
    pub source_base_url: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
}
