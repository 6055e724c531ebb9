use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeterminedError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    DatabaseLock,
}

impl From<&str> for DeterminedError {
    fn from(error: &str) -> Self {
        DeterminedError::ConfigError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeterminedError>;
