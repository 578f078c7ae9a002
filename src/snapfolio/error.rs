use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Photo not found: {0}")]
    PhotoNotFound(u32),

    #[error("Directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("No supported image files found in {}", .0.display())]
    NoImagesFound(PathBuf),

    #[error("Output would overwrite the input file {}", .0.display())]
    SameFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
