use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read resorts file {path}: {source}")]
    ResortsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resorts file: {0}")]
    ResortsFileParse(#[from] serde_yaml::Error),

    #[error("resort catalog validation failed: {0}")]
    Validation(String),

    #[error("invalid resort identifier \"{slug}\": {reason}")]
    InvalidSlug { slug: String, reason: &'static str },
}
