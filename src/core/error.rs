use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdaptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid sample: {0}")]
    InvalidSample(String),
}

pub type Result<T> = std::result::Result<T, AdaptError>;
