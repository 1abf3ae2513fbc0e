use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlotError {
    #[error("Image decode error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BlotError>;
