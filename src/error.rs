use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to access the dotenv file.
///
/// Parsing itself never fails: malformed lines are skipped, so reading the
/// file is the only fallible step of a load.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }

    /// Whether the file simply does not exist.
    pub fn not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    pub fn into_io(self) -> io::Error {
        match self {
            Self::Io { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn keeps_underlying_io_error() {
        let err = Error::io(
            "missing/.env",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert!(err.not_found());
        assert_eq!(err.path(), Path::new("missing/.env"));
        assert_eq!(
            err.to_string(),
            "failed to read `missing/.env`: no such file"
        );
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "no such file");
        assert_eq!(err.into_io().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn permission_denied_is_not_not_found() {
        let err = Error::io(
            ".env",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(!err.not_found());
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
