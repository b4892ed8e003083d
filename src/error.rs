use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("font {} is not usable: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },
    #[error("icon sizes must be positive")]
    InvalidSize,
    #[error("requested size {size} exceeds master size {master}")]
    SizeExceedsMaster { size: u32, master: u32 },
    #[error("master image must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },
    #[error("unknown artwork '{name}' (available: {available})")]
    UnknownArtwork { name: String, available: String },
    #[error("config line {line}: {message}")]
    Config { line: usize, message: String },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;
