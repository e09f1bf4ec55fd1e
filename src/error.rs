use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {source}")]
    Parse {
        source: serde_json::Error,
        raw: String,
    },
    #[error("unexpected health response")]
    Unhealthy { body: serde_json::Value },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
