// Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings break an ordering or size invariant; nothing was painted.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Creating the output directory or writing the GIF failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The GIF encoder rejected a frame or the loop setting.
    #[error("GIF encode error: {0}")]
    Encode(#[from] image::ImageError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
