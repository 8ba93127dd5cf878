use thiserror::Error;

/// The main error type for chore operations
#[derive(Debug, Error)]
pub enum ChoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Task error: {0}")]
    Task(String),
}

/// Result type alias for chore operations
pub type ChoreResult<T> = Result<T, ChoreError>;
