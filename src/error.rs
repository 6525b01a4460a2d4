#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("render error: {0}")]
    Render(#[from] tera::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
