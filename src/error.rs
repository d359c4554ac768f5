use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Server rejected {url} with HTTP {status}")]
    Rejected { url: String, status: u16 },

    #[error("Invalid rules archive: {reason}")]
    Archive { reason: String },

    #[error("Rules archive contains no entries")]
    EmptyArchive,

    #[error("Refusing to extract entry outside destination: {path}")]
    PathTraversal { path: String },

    #[error("Failed to write {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used when reporting a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Remote,
    Archive,
    Filesystem,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport { .. } => ErrorKind::Transport,
            FetchError::Rejected { .. } => ErrorKind::Remote,
            FetchError::Archive { .. }
            | FetchError::EmptyArchive
            | FetchError::PathTraversal { .. } => ErrorKind::Archive,
            FetchError::Filesystem { .. }
            | FetchError::PermissionDenied { .. }
            | FetchError::HomeDirectoryNotFound
            | FetchError::Io(_) => ErrorKind::Filesystem,
        }
    }

    pub fn archive<S: Into<String>>(reason: S) -> Self {
        FetchError::Archive {
            reason: reason.into(),
        }
    }

    /// Maps a write-side IO failure for `path`, keeping permission problems distinct.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied { path },
            _ => FetchError::Filesystem { path, source },
        }
    }
}
