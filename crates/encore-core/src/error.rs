use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoreError {
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EncoreResult<T> = Result<T, EncoreError>;
