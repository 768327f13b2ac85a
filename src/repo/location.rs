use std::env;
use std::path::{Path, PathBuf};

use super::{Error, Result};

/// Name of the metadata directory nested inside a non-bare repository's
/// working tree.
pub(crate) const GIT_DIR_NAME: &str = ".git";

/// A resolved repository location: the absolute root path plus the derived
/// path of the metadata directory.
///
/// For a non-bare repository the metadata directory is `root/.git`; for a
/// bare repository the metadata directory *is* the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    root: PathBuf,
    git_dir: PathBuf,
    bare: bool,
}

impl Location {
    /// Resolve a user-supplied path (relative or absolute) to a repository
    /// location.
    ///
    /// Relative paths are resolved against the process's current working
    /// directory at call time. Resolution never touches the filesystem
    /// beyond read-only inspection: a target that doesn't exist yet is
    /// fine (it will be created during layout building), but a target that
    /// exists and is not a directory is rejected with
    /// [`Error::InvalidTarget`].
    pub fn resolve<P: AsRef<Path>>(path: P, bare: bool) -> Result<Self> {
        let path = path.as_ref();

        let root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()?.join(path)
        };

        if root.exists() && !root.is_dir() {
            return Err(Error::InvalidTarget(root));
        }

        let git_dir = if bare {
            root.clone()
        } else {
            root.join(GIT_DIR_NAME)
        };

        Ok(Location {
            root,
            git_dir,
            bare,
        })
    }

    /// Return the absolute root path of the repository.
    ///
    /// For a non-bare repository this is the working-tree root; for a bare
    /// repository it is the metadata directory itself.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Return the path of the metadata directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the working-tree root, or `None` for a bare repository.
    pub fn work_dir(&self) -> Option<&Path> {
        if self.bare {
            None
        } else {
            Some(self.root.as_path())
        }
    }

    /// Report whether this location describes a bare repository.
    pub fn is_bare(&self) -> bool {
        self.bare
    }
}
