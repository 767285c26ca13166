use serde_json::Error as SerdeError;
use std::path::{Path, PathBuf};
use std::{error, fmt, io};

/// Error returned by [`load_map`](crate::load_map) and
/// [`load_tileset`](crate::load_tileset).
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read (missing, unreadable, permission denied).
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file was read but its contents are not a valid Tiled JSON document.
    Decode {
        /// Path whose contents failed to decode.
        path: PathBuf,
        /// Underlying JSON error (syntax or type mismatch).
        source: SerdeError,
    },
}

impl LoadError {
    /// Path of the file the failed load was reading.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Decode { path, .. } => path,
        }
    }

    /// True if the file could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, LoadError::Io { .. })
    }

    /// True if the file was read but did not decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode { .. })
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            LoadError::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Decode { source, .. } => Some(source),
        }
    }
}
