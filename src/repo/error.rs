use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Describes the potential error conditions that might arise from rsrepo
/// `repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The target path exists but is not a directory, so it can not
    /// become (or contain) a repository.
    #[error("target path {} exists and is not a directory", .0.display())]
    InvalidTarget(PathBuf),

    /// A repository metadata structure is already present at the target
    /// and the caller asked for initialization to fail in that case.
    #[error("repository already initialized at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    /// No repository metadata structure was found at the target.
    #[error("no repository found at {}", .0.display())]
    NoRepository(PathBuf),

    /// An I/O failure interrupted layout creation. Cleanup of the paths
    /// created before the failure is best-effort, so the target may need
    /// to be removed manually before retrying.
    #[error("could not initialize repository at {}", .path.display())]
    InitializationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// A specialized `Result` type for rsrepo `repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
