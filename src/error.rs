use thiserror::Error;

#[derive(Error, Debug)]
pub enum EduTrackError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, EduTrackError>;
