//! Error taxonomy for every processor operation.
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path expected to be an existing directory is not one.
    #[error("The directory '{}' does not exist.", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// A path expected to be an existing file is not one.
    #[error("The file '{}' does not exist.", .path.display())]
    FileNotFound { path: PathBuf },

    /// The JSON was malformed, had the wrong shape, or was a bare `null`.
    /// `source` is `None` only in the `null` case.
    #[error("Failed to deserialize JSON from the file '{}'.", .path.display())]
    DeserializationFailed {
        path: PathBuf,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Enumerating a directory failed (permissions, vanished entries, ...).
    #[error("{source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryNotFound { path }
            | Self::FileNotFound { path }
            | Self::DeserializationFailed { path, .. }
            | Self::Walk { path, .. }
            | Self::Io { path, .. } => path.as_path(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DirectoryNotFound { .. } | Self::FileNotFound { .. })
    }
}
